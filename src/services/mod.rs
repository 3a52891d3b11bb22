//! Services module
//! 
//! Este módulo contiene la lógica de negocio de la aplicación: el motor
//! de filtrado del catálogo y la entrega de consultas de contacto.

pub mod catalog_filter;
pub mod contact_service;

pub use catalog_filter::*;
pub use contact_service::{ContactService, ContactSink, InMemoryInbox, WebhookSink};
