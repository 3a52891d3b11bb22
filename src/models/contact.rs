//! Modelo de consulta de contacto
//! 
//! Una consulta aceptada recibe un identificador y una marca de tiempo
//! antes de entregarse al destino configurado.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::contact_dto::ContactRequest;

/// Consulta aceptada, lista para entregarse
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub vehicle_id: Option<String>,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

impl Inquiry {
    pub fn from_request(request: ContactRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            phone: request.phone.map(|p| p.trim().to_string()),
            vehicle_id: request.vehicle_id,
            message: request.message.trim().to_string(),
            received_at: Utc::now(),
        }
    }
}

/// Recibo devuelto al cliente tras una entrega exitosa
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InquiryReceipt {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
}

impl From<&Inquiry> for InquiryReceipt {
    fn from(inquiry: &Inquiry) -> Self {
        Self {
            id: inquiry.id,
            received_at: inquiry.received_at,
        }
    }
}
