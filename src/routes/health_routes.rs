use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::json;

use crate::state::AppState;

pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Endpoint de salud simple
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "prestige-motors",
        "version": env!("CARGO_PKG_VERSION"),
        "vehicles": state.catalog.len(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
