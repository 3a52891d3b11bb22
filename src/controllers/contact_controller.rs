use std::sync::Arc;

use crate::dto::api_response::ApiResponse;
use crate::dto::contact_dto::ContactRequest;
use crate::models::contact::InquiryReceipt;
use crate::services::contact_service::ContactService;
use crate::utils::errors::AppError;

pub struct ContactController {
    service: Arc<ContactService>,
}

impl ContactController {
    pub fn new(service: Arc<ContactService>) -> Self {
        Self { service }
    }

    pub async fn submit(
        &self,
        request: ContactRequest,
    ) -> Result<ApiResponse<InquiryReceipt>, AppError> {
        let receipt = self.service.submit(request).await?;

        Ok(ApiResponse::success_with_message(
            receipt,
            "Thank you! Our team will contact you shortly".to_string(),
        ))
    }
}
