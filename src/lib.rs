//! Prestige Motors - API del catálogo
//! 
//! Backend del sitio web del concesionario: catálogo estático filtrable,
//! conteos por categoría, facetas y formulario de contacto.

pub mod catalog;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use middleware::cors::cors_layer;
use state::AppState;

/// Crear el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::vehicle_routes::create_vehicle_router())
        .merge(routes::contact_routes::create_contact_router(&state));

    Router::new()
        .merge(routes::health_routes::create_health_router())
        .nest("/api", api)
        .layer(cors_layer(&state.config))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
