use std::sync::Arc;

use crate::catalog::Catalog;
use crate::dto::vehicle_dto::{
    VehicleDetailResponse, VehicleListResponse, VehicleQuery, VehicleResponse,
};
use crate::models::vehicle::Category;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::catalog_filter::{CatalogFacets, CategoryCounts};
use crate::utils::errors::{not_found_error, AppError};

/// Máximo de vehículos relacionados en la página de detalle
const RELATED_LIMIT: usize = 3;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            repository: VehicleRepository::new(catalog),
        }
    }

    pub fn list(&self, query: VehicleQuery) -> Result<VehicleListResponse, AppError> {
        let criteria = query.into_criteria()?;
        let vehicles: Vec<VehicleResponse> = self
            .repository
            .find_matching(&criteria)
            .into_iter()
            .map(VehicleResponse::from)
            .collect();

        Ok(VehicleListResponse {
            total: self.repository.total(),
            count: vehicles.len(),
            vehicles,
        })
    }

    pub fn list_by_category(
        &self,
        category: &str,
        mut query: VehicleQuery,
    ) -> Result<VehicleListResponse, AppError> {
        let category = Category::from_tag(category)
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", category)))?;

        // La categoría de la ruta manda sobre la de la query
        query.category = Some(category.as_str().to_string());
        self.list(query)
    }

    pub fn get_by_id(&self, id: &str) -> Result<VehicleDetailResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        let related = self
            .repository
            .find_related(vehicle, RELATED_LIMIT)
            .into_iter()
            .map(VehicleResponse::from)
            .collect();

        Ok(VehicleDetailResponse {
            vehicle: VehicleResponse::from(vehicle),
            related,
        })
    }

    pub fn category_counts(&self) -> CategoryCounts {
        self.repository.category_counts()
    }

    pub fn facets(&self) -> CatalogFacets {
        self.repository.facets()
    }
}
