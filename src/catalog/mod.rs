//! Catálogo de vehículos
//! 
//! Carga el catálogo una sola vez al arrancar (semilla interna o archivo
//! JSON) y lo expone en solo lectura al resto de la aplicación.

pub mod seed;

use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::models::vehicle::VehicleRecord;

/// Errores al cargar el catálogo
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Cannot read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate vehicle id '{0}'")]
    DuplicateId(String),
}

/// Catálogo inmutable
#[derive(Debug, Clone)]
pub struct Catalog {
    vehicles: Vec<VehicleRecord>,
}

impl Catalog {
    /// Crear un catálogo verificando que los ids sean únicos
    pub fn new(vehicles: Vec<VehicleRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(vehicles.len());
        for vehicle in &vehicles {
            if !seen.insert(vehicle.id.as_str()) {
                return Err(CatalogError::DuplicateId(vehicle.id.clone()));
            }
        }
        Ok(Self { vehicles })
    }

    /// Catálogo con los 16 vehículos de la semilla
    pub fn seeded() -> Self {
        Self {
            vehicles: seed::seed_vehicles(),
        }
    }

    /// Cargar el catálogo desde un archivo JSON (array de vehículos)
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let vehicles: Vec<VehicleRecord> = serde_json::from_str(&raw)?;
        info!("📂 Catálogo cargado desde {} ({} vehículos)", path.display(), vehicles.len());
        Self::new(vehicles)
    }

    /// Semilla interna, o el archivo indicado si existe configuración
    pub fn load(path: Option<&str>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => {
                let catalog = Self::seeded();
                info!("🚗 Catálogo semilla cargado ({} vehículos)", catalog.len());
                Ok(catalog)
            }
        }
    }

    pub fn vehicles(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    pub fn find(&self, id: &str) -> Option<&VehicleRecord> {
        self.vehicles.iter().find(|vehicle| vehicle.id == id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
