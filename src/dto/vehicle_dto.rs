use serde::{Deserialize, Serialize};

use crate::models::criteria::{FilterCriteria, PriceRange, Selection, SortOrder, YearFilter};
use crate::models::vehicle::{Category, FuelType, VehicleRecord};
use crate::utils::errors::AppError;

// Parámetros de consulta del listado de vehículos
#[derive(Debug, Default, Deserialize)]
pub struct VehicleQuery {
    pub category: Option<String>,
    pub fuel_type: Option<String>,
    pub year: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

/// Vacío o "all" equivale a no enviar el parámetro
fn blank_or_all(raw: &str) -> bool {
    let value = raw.trim();
    value.is_empty() || value.eq_ignore_ascii_case("all")
}

fn parse_price(raw: Option<&str>, key: &str) -> Result<Option<u64>, AppError> {
    match raw {
        Some(value) if !blank_or_all(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("Invalid {} '{}'", key, value))),
        _ => Ok(None),
    }
}

impl VehicleQuery {
    /// Convertir la query en criterios; solo un año, precio u orden ilegible es un error
    pub fn into_criteria(self) -> Result<FilterCriteria, AppError> {
        let year = match self.year.as_deref() {
            Some(raw) => YearFilter::parse(raw)
                .map_err(|_| AppError::BadRequest(format!("Invalid year '{}'", raw)))?,
            None => YearFilter::All,
        };

        let sort_order = match self.sort.as_deref() {
            Some(raw) if !blank_or_all(raw) => SortOrder::parse(raw)
                .ok_or_else(|| AppError::BadRequest(format!("Invalid sort '{}'", raw)))?,
            _ => SortOrder::default(),
        };

        let defaults = PriceRange::default();
        let min_price = parse_price(self.min_price.as_deref(), "min_price")?;
        let max_price = parse_price(self.max_price.as_deref(), "max_price")?;

        Ok(FilterCriteria {
            category: self.category.as_deref().map(Selection::parse).unwrap_or_default(),
            fuel_type: self.fuel_type.as_deref().map(Selection::parse).unwrap_or_default(),
            year,
            price_range: PriceRange::new(
                min_price.unwrap_or(defaults.min),
                max_price.unwrap_or(defaults.max),
            ),
            search_term: self.search.map(|s| s.trim().to_string()).unwrap_or_default(),
            sort_order,
        })
    }
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub price: u64,
    pub price_display: String,
    pub year: i32,
    pub fuel_type: FuelType,
    pub features: Vec<String>,
    pub image: String,
    pub logo: String,
}

impl From<&VehicleRecord> for VehicleResponse {
    fn from(vehicle: &VehicleRecord) -> Self {
        Self {
            id: vehicle.id.clone(),
            name: vehicle.name.clone(),
            category: vehicle.category,
            price: vehicle.price,
            price_display: vehicle.price_display(),
            year: vehicle.year,
            fuel_type: vehicle.fuel_type,
            features: vehicle.features.clone(),
            image: vehicle.image.clone(),
            logo: vehicle.logo.clone(),
        }
    }
}

// Response de listado: `total` es el tamaño del catálogo, `count` lo que pasó el filtro
#[derive(Debug, Serialize)]
pub struct VehicleListResponse {
    pub total: usize,
    pub count: usize,
    pub vehicles: Vec<VehicleResponse>,
}

// Response de detalle con vehículos relacionados
#[derive(Debug, Serialize)]
pub struct VehicleDetailResponse {
    pub vehicle: VehicleResponse,
    pub related: Vec<VehicleResponse>,
}
