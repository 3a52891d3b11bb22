//! Criterios de filtrado del catálogo
//! 
//! Estado efímero por petición: se reconstruye en cada interacción del
//! usuario y nunca se persiste.

use serde::{Deserialize, Serialize};
use std::num::ParseIntError;

/// Selección de etiqueta: "all" o una etiqueta concreta
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Vacío o "all" (sin distinguir mayúsculas) significa sin filtro
    pub fn parse(raw: &str) -> Self {
        let tag = raw.trim();
        if tag.is_empty() || tag.eq_ignore_ascii_case("all") {
            Selection::All
        } else {
            Selection::Only(tag.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(tag) => tag.eq_ignore_ascii_case(value),
        }
    }
}

/// Filtro de año de modelo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearFilter {
    #[default]
    All,
    Only(i32),
}

impl YearFilter {
    pub fn parse(raw: &str) -> Result<Self, ParseIntError> {
        let value = raw.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            return Ok(YearFilter::All);
        }
        value.parse().map(YearFilter::Only)
    }

    pub fn matches(&self, year: i32) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Only(selected) => *selected == year,
        }
    }
}

/// Rango de precio inclusivo `[min, max]`
///
/// No se valida `min <= max`: un rango invertido simplemente no deja
/// pasar ningún vehículo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: u64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self { min: 0, max: u64::MAX }
    }
}

/// Orden de la lista mostrada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "newest", alias = "default")]
    Newest,
    #[serde(rename = "price-asc", alias = "price-ascending")]
    PriceAscending,
    #[serde(rename = "price-desc", alias = "price-descending")]
    PriceDescending,
    #[serde(rename = "name", alias = "name-alphabetical")]
    Name,
}

impl SortOrder {
    /// Buscar un orden por nombre o alias, sin distinguir mayúsculas
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "newest" | "default" => Some(SortOrder::Newest),
            "price-asc" | "price-ascending" => Some(SortOrder::PriceAscending),
            "price-desc" | "price-descending" => Some(SortOrder::PriceDescending),
            "name" | "name-alphabetical" => Some(SortOrder::Name),
            _ => None,
        }
    }
}

/// Criterios completos de filtrado y orden
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    pub category: Selection,
    pub fuel_type: Selection,
    pub year: YearFilter,
    pub price_range: PriceRange,
    pub search_term: String,
    pub sort_order: SortOrder,
}
