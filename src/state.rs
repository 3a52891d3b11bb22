//! Shared application state
//! 
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Todo se construye explícitamente en el
//! arranque; no hay singletons globales.

use std::sync::Arc;
use tracing::info;

use crate::catalog::Catalog;
use crate::config::environment::EnvironmentConfig;
use crate::middleware::rate_limit::RateLimitState;
use crate::services::contact_service::{ContactService, ContactSink, InMemoryInbox, WebhookSink};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub catalog: Arc<Catalog>,
    pub contact: Arc<ContactService>,
    pub rate_limit: RateLimitState,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, catalog: Catalog, sink: Arc<dyn ContactSink>) -> Self {
        let catalog = Arc::new(catalog);
        let contact = Arc::new(ContactService::new(catalog.clone(), sink, config.contact_timeout));
        let rate_limit = RateLimitState::new(&config);

        Self {
            config,
            catalog,
            contact,
            rate_limit,
        }
    }
}

/// Elegir el destino de las consultas según la configuración
pub fn build_contact_sink(config: &EnvironmentConfig) -> Result<Arc<dyn ContactSink>, reqwest::Error> {
    match &config.contact_webhook_url {
        Some(url) => {
            info!("📨 Consultas de contacto vía webhook");
            Ok(Arc::new(WebhookSink::new(url.clone(), config.contact_timeout)?))
        }
        None => {
            info!("📨 Consultas de contacto en bandeja en memoria");
            Ok(Arc::new(InMemoryInbox::new()))
        }
    }
}
