//! Motor de filtrado y orden del catálogo
//! 
//! Funciones puras sobre el catálogo inmutable: nada aquí puede fallar.
//! Cualquier combinación de criterios produce, como mucho, una lista vacía.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::criteria::{FilterCriteria, SortOrder};
use crate::models::vehicle::{Category, FuelType, VehicleRecord};

/// Filtrar registros conservando su orden relativo
///
/// Un registro aparece en la salida si y solo si pasa los cinco predicados
/// (categoría, combustible, año, precio y búsqueda).
pub fn filter_catalog<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a VehicleRecord>
where
    I: IntoIterator<Item = &'a VehicleRecord>,
{
    let search = criteria.search_term.to_lowercase();

    records
        .into_iter()
        .filter(|record| criteria.category.matches(record.category.as_str()))
        .filter(|record| criteria.fuel_type.matches(record.fuel_type.as_str()))
        .filter(|record| criteria.year.matches(record.year))
        .filter(|record| criteria.price_range.contains(record.price))
        .filter(|record| matches_search(record, &search))
        .collect()
}

fn matches_search(record: &VehicleRecord, lowered_term: &str) -> bool {
    lowered_term.is_empty()
        || record.name.to_lowercase().contains(lowered_term)
        || record.category.as_str().contains(lowered_term)
}

/// Ordenar registros; el orden es estable para claves iguales
pub fn sort_catalog(mut records: Vec<&VehicleRecord>, sort_order: SortOrder) -> Vec<&VehicleRecord> {
    match sort_order {
        SortOrder::Newest => records.sort_by(|a, b| b.year.cmp(&a.year)),
        SortOrder::PriceAscending => records.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceDescending => records.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOrder::Name => records.sort_by(|a, b| compare_names(&a.name, &b.name)),
    }
    records
}

/// Filtrar y después ordenar según `criteria.sort_order`
pub fn apply_criteria<'a>(catalog: &'a [VehicleRecord], criteria: &FilterCriteria) -> Vec<&'a VehicleRecord> {
    sort_catalog(filter_catalog(catalog, criteria), criteria.sort_order)
}

/// Comparación de nombres al estilo de una colación de idioma:
/// primero sin distinguir mayúsculas, después con ellas para desempatar.
fn compare_names(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    primary.then_with(|| a.cmp(b))
}

/// Conteo de vehículos por categoría, más el total ("all")
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub all: usize,
    #[serde(flatten)]
    pub by_category: BTreeMap<Category, usize>,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }
}

/// Contar vehículos por categoría; independiente de los criterios actuales
pub fn count_by_category(catalog: &[VehicleRecord]) -> CategoryCounts {
    let mut by_category: BTreeMap<Category, usize> =
        Category::ALL.into_iter().map(|category| (category, 0)).collect();

    for record in catalog {
        *by_category.entry(record.category).or_insert(0) += 1;
    }

    CategoryCounts {
        all: catalog.len(),
        by_category,
    }
}

/// Límites de precio del catálogo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBounds {
    pub min: u64,
    pub max: u64,
}

/// Valores disponibles para construir los controles de filtro
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogFacets {
    pub categories: Vec<Category>,
    pub fuel_types: Vec<FuelType>,
    pub years: Vec<i32>,
    pub price: Option<PriceBounds>,
}

pub fn catalog_facets(catalog: &[VehicleRecord]) -> CatalogFacets {
    let mut years: Vec<i32> = catalog.iter().map(|record| record.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();

    let fuel_types = FuelType::ALL
        .into_iter()
        .filter(|fuel| catalog.iter().any(|record| record.fuel_type == *fuel))
        .collect();

    let categories = Category::ALL
        .into_iter()
        .filter(|category| catalog.iter().any(|record| record.category == *category))
        .collect();

    let price = catalog
        .iter()
        .map(|record| record.price)
        .min()
        .zip(catalog.iter().map(|record| record.price).max())
        .map(|(min, max)| PriceBounds { min, max });

    CatalogFacets {
        categories,
        fuel_types,
        years,
        price,
    }
}

/// Otros vehículos de la misma categoría, en orden de catálogo
pub fn related_vehicles<'a>(
    catalog: &'a [VehicleRecord],
    vehicle: &VehicleRecord,
    limit: usize,
) -> Vec<&'a VehicleRecord> {
    catalog
        .iter()
        .filter(|record| record.category == vehicle.category && record.id != vehicle.id)
        .take(limit)
        .collect()
}
