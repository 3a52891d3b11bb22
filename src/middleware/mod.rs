//! Middleware del sistema
//! 
//! Este módulo contiene el middleware de CORS y rate limiting.

pub mod cors;
pub mod rate_limit;

pub use cors::*;
pub use rate_limit::*;
