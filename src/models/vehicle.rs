//! Modelo de Vehicle
//! 
//! Este módulo contiene el registro inmutable de vehículo del catálogo
//! y las enumeraciones cerradas de categoría y tipo de combustible.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categoría del vehículo - conjunto fijo conocido en compilación
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sports,
    Suv,
    Sedan,
    Electric,
    Concept,
}

impl Category {
    /// Todas las categorías en el orden en que se muestran
    pub const ALL: [Category; 5] = [
        Category::Sports,
        Category::Suv,
        Category::Sedan,
        Category::Electric,
        Category::Concept,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sports => "sports",
            Category::Suv => "suv",
            Category::Sedan => "sedan",
            Category::Electric => "electric",
            Category::Concept => "concept",
        }
    }

    /// Buscar una categoría por su etiqueta, sin distinguir mayúsculas
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(tag.trim()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tipo de combustible del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gas,
    Electric,
    Hybrid,
    Hydrogen,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::Gas,
        FuelType::Electric,
        FuelType::Hybrid,
        FuelType::Hydrogen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Gas => "gas",
            FuelType::Electric => "electric",
            FuelType::Hybrid => "hybrid",
            FuelType::Hydrogen => "hydrogen",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vehicle del catálogo - solo lectura durante toda la vida del proceso
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleRecord {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub price: u64,
    pub year: i32,
    pub fuel_type: FuelType,
    #[serde(default)]
    pub features: Vec<String>,
    pub image: String,
    pub logo: String,
}

impl VehicleRecord {
    /// Precio formateado para mostrar, p.ej. `$185,000`
    pub fn price_display(&self) -> String {
        format_price(self.price)
    }
}

/// Formatear un precio entero con separadores de miles
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}
