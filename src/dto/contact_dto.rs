use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::validate_phone;

// Request del formulario de contacto
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(custom = "validate_phone")]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub vehicle_id: Option<String>,

    #[validate(length(min = 10, max = 2000))]
    pub message: String,
}
