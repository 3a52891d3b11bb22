use std::sync::Arc;

use crate::catalog::Catalog;
use crate::models::criteria::FilterCriteria;
use crate::models::vehicle::VehicleRecord;
use crate::services::catalog_filter::{
    apply_criteria, catalog_facets, count_by_category, related_vehicles, CatalogFacets,
    CategoryCounts,
};

// Acceso de solo lectura al catálogo
pub struct VehicleRepository {
    catalog: Arc<Catalog>,
}

impl VehicleRepository {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn total(&self) -> usize {
        self.catalog.len()
    }

    pub fn find_matching(&self, criteria: &FilterCriteria) -> Vec<&VehicleRecord> {
        apply_criteria(self.catalog.vehicles(), criteria)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&VehicleRecord> {
        self.catalog.find(id)
    }

    pub fn find_related(&self, vehicle: &VehicleRecord, limit: usize) -> Vec<&VehicleRecord> {
        related_vehicles(self.catalog.vehicles(), vehicle, limit)
    }

    pub fn category_counts(&self) -> CategoryCounts {
        count_by_category(self.catalog.vehicles())
    }

    pub fn facets(&self) -> CatalogFacets {
        catalog_facets(self.catalog.vehicles())
    }
}
