use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{VehicleDetailResponse, VehicleListResponse, VehicleQuery};
use crate::services::catalog_filter::{CatalogFacets, CategoryCounts};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/vehicles", get(list_vehicles))
        .route("/vehicles/:id", get(get_vehicle))
        .route("/categories", get(category_counts))
        .route("/categories/:category/vehicles", get(list_category_vehicles))
        .route("/facets", get(facets))
}

async fn list_vehicles(
    State(state): State<AppState>,
    query: Result<Query<VehicleQuery>, QueryRejection>,
) -> Result<Json<VehicleListResponse>, AppError> {
    let Query(query) = query?;
    let controller = VehicleController::new(state.catalog.clone());
    let response = controller.list(query)?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VehicleDetailResponse>, AppError> {
    let controller = VehicleController::new(state.catalog.clone());
    let response = controller.get_by_id(&id)?;
    Ok(Json(response))
}

async fn category_counts(State(state): State<AppState>) -> Json<CategoryCounts> {
    let controller = VehicleController::new(state.catalog.clone());
    Json(controller.category_counts())
}

async fn list_category_vehicles(
    State(state): State<AppState>,
    Path(category): Path<String>,
    query: Result<Query<VehicleQuery>, QueryRejection>,
) -> Result<Json<VehicleListResponse>, AppError> {
    let Query(query) = query?;
    let controller = VehicleController::new(state.catalog.clone());
    let response = controller.list_by_category(&category, query)?;
    Ok(Json(response))
}

async fn facets(State(state): State<AppState>) -> Json<CatalogFacets> {
    let controller = VehicleController::new(state.catalog.clone());
    Json(controller.facets())
}
