use axum::{
    extract::{rejection::JsonRejection, State},
    middleware::from_fn_with_state,
    routing::post,
    Json, Router,
};
use crate::controllers::contact_controller::ContactController;
use crate::dto::api_response::ApiResponse;
use crate::dto::contact_dto::ContactRequest;
use crate::middleware::rate_limit::rate_limit_middleware;
use crate::models::contact::InquiryReceipt;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_contact_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/contact", post(submit_contact))
        .route_layer(from_fn_with_state(state.rate_limit.clone(), rate_limit_middleware))
}

async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<InquiryReceipt>>, AppError> {
    let Json(request) = payload?;
    let controller = ContactController::new(state.contact.clone());
    let response = controller.submit(request).await?;
    Ok(Json(response))
}
