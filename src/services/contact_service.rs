//! Servicio de contacto
//! 
//! Valida las consultas del formulario y las entrega a un destino
//! (`ContactSink`) con un tiempo máximo de espera.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{error, info, warn};
use validator::Validate;

use crate::catalog::Catalog;
use crate::dto::contact_dto::ContactRequest;
use crate::models::contact::{Inquiry, InquiryReceipt};
use crate::utils::errors::{not_found_error, AppError, AppResult};

/// Errores de entrega de una consulta
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Webhook responded with status {0}")]
    Status(u16),
}

/// Destino de las consultas de contacto
#[async_trait]
pub trait ContactSink: Send + Sync {
    async fn deliver(&self, inquiry: &Inquiry) -> Result<(), DeliveryError>;

    fn name(&self) -> &'static str;
}

/// Bandeja en memoria: destino por defecto cuando no hay webhook
#[derive(Clone, Default)]
pub struct InMemoryInbox {
    inquiries: Arc<RwLock<Vec<Inquiry>>>,
}

impl InMemoryInbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn inquiries(&self) -> Vec<Inquiry> {
        self.inquiries.read().await.clone()
    }
}

#[async_trait]
impl ContactSink for InMemoryInbox {
    async fn deliver(&self, inquiry: &Inquiry) -> Result<(), DeliveryError> {
        let mut inquiries = self.inquiries.write().await;
        inquiries.push(inquiry.clone());
        info!("📥 Consulta {} guardada en bandeja ({} en total)", inquiry.id, inquiries.len());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}

/// Entrega por webhook HTTP (JSON)
pub struct WebhookSink {
    url: String,
    client: reqwest::Client,
}

impl WebhookSink {
    pub fn new(url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { url, client })
    }
}

#[async_trait]
impl ContactSink for WebhookSink {
    async fn deliver(&self, inquiry: &Inquiry) -> Result<(), DeliveryError> {
        info!("📤 Enviando consulta {} a webhook", inquiry.id);

        let response = self.client.post(&self.url).json(inquiry).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("❌ Webhook respondió {} para consulta {}", status, inquiry.id);
            return Err(DeliveryError::Status(status.as_u16()));
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "webhook"
    }
}

pub struct ContactService {
    catalog: Arc<Catalog>,
    sink: Arc<dyn ContactSink>,
    timeout: Duration,
}

impl ContactService {
    pub fn new(catalog: Arc<Catalog>, sink: Arc<dyn ContactSink>, timeout: Duration) -> Self {
        Self {
            catalog,
            sink,
            timeout,
        }
    }

    /// Validar, construir y entregar la consulta
    pub async fn submit(&self, request: ContactRequest) -> AppResult<InquiryReceipt> {
        request.validate()?;

        if let Some(vehicle_id) = request.vehicle_id.as_deref() {
            if self.catalog.find(vehicle_id).is_none() {
                return Err(not_found_error("Vehicle", vehicle_id));
            }
        }

        let inquiry = Inquiry::from_request(request);

        match tokio::time::timeout(self.timeout, self.sink.deliver(&inquiry)).await {
            Ok(Ok(())) => {
                info!("✅ Consulta {} entregada vía {}", inquiry.id, self.sink.name());
                Ok(InquiryReceipt::from(&inquiry))
            }
            Ok(Err(e)) => {
                error!("❌ Error entregando consulta {}: {}", inquiry.id, e);
                Err(AppError::ExternalApi(e.to_string()))
            }
            Err(_) => {
                error!("⏱️ Timeout entregando consulta {} tras {:?}", inquiry.id, self.timeout);
                Err(AppError::ServiceUnavailable(
                    "The inquiry could not be delivered in time".to_string(),
                ))
            }
        }
    }
}
