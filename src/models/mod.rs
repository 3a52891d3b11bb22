//! Modelos del sistema
//! 
//! Este módulo contiene los modelos de datos del catálogo, los criterios
//! de filtrado y las consultas de contacto.

pub mod contact;
pub mod criteria;
pub mod vehicle;

pub use contact::*;
pub use criteria::*;
pub use vehicle::*;
