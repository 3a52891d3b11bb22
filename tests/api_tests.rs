use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use prestige_motors::catalog::Catalog;
use prestige_motors::config::EnvironmentConfig;
use prestige_motors::create_app;
use prestige_motors::services::InMemoryInbox;
use prestige_motors::state::AppState;

// Función helper para crear la app de test
fn create_test_app() -> (Router, InMemoryInbox) {
    create_test_app_with(Catalog::seeded())
}

fn create_test_app_with(catalog: Catalog) -> (Router, InMemoryInbox) {
    let config = EnvironmentConfig {
        rate_limit_requests: 2,
        rate_limit_window: 60,
        contact_timeout: Duration::from_secs(1),
        ..Default::default()
    };
    let inbox = InMemoryInbox::new();
    let state = AppState::new(config, catalog, Arc::new(inbox.clone()));
    (create_app(state), inbox)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn post_contact(app: Router, ip: &str, body: Value) -> (StatusCode, Value) {
    post_contact_raw(app, ip, body.to_string()).await
}

async fn post_contact_raw(app: Router, ip: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-forwarded-for", ip)
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn ids(body: &Value) -> Vec<String> {
    body["vehicles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let (app, _) = create_test_app();
    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["vehicles"], 16);
}

#[tokio::test]
async fn test_list_without_filters_returns_catalog_newest_first() {
    let (app, _) = create_test_app();
    let (status, body) = get(app, "/api/vehicles").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 16);
    assert_eq!(body["count"], 16);
    assert_eq!(ids(&body)[0], "aether-vision");
}

#[tokio::test]
async fn test_filter_by_category_is_case_insensitive() {
    let (app, _) = create_test_app();
    let (status, body) = get(app, "/api/vehicles?category=Electric&max_price=1000000").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["volt-luxe", "eon-grand-tourer", "urban-ev"]);
}

#[tokio::test]
async fn test_search_and_price_filters() {
    let (app, _) = create_test_app();
    let (_, body) = get(app.clone(), "/api/vehicles?search=gt&sort=name").await;
    assert_eq!(ids(&body), vec!["gt-turismo", "stradale-gts"]);

    let (_, body) = get(app, "/api/vehicles?min_price=0&max_price=50000").await;
    assert_eq!(ids(&body), vec!["urban-ev"]);
    assert_eq!(body["vehicles"][0]["price_display"], "$45,000");
}

#[tokio::test]
async fn test_sort_by_price_ascending() {
    let (app, _) = create_test_app();
    let (_, body) = get(app, "/api/vehicles?category=suv&sort=price-asc").await;
    assert_eq!(ids(&body), vec!["terra-sport", "summit-x", "atlas-prestige"]);
}

#[tokio::test]
async fn test_unknown_category_filter_is_empty_not_error() {
    let (app, _) = create_test_app();
    let (status, body) = get(app, "/api/vehicles?category=truck").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_invalid_year_is_bad_request() {
    let (app, _) = create_test_app();
    let (status, body) = get(app, "/api/vehicles?year=soon").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_blank_price_and_sort_params_mean_no_filter() {
    let (app, _) = create_test_app();

    let (status, body) = get(app.clone(), "/api/vehicles?min_price=&max_price=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 16);

    let (status, body) = get(app.clone(), "/api/vehicles?sort=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body)[0], "aether-vision");

    let (status, body) = get(app, "/api/vehicles?category=all&min_price=all&sort=all").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 16);
}

#[tokio::test]
async fn test_malformed_price_or_sort_is_json_bad_request() {
    let (app, _) = create_test_app();

    let (status, body) = get(app.clone(), "/api/vehicles?max_price=cheap").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    let (status, body) = get(app, "/api/vehicles?sort=random").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_vehicle_detail_includes_related() {
    let (app, _) = create_test_app();
    let (status, body) = get(app.clone(), "/api/vehicles/summit-x").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vehicle"]["name"], "Summit X");
    assert_eq!(body["related"].as_array().unwrap().len(), 2);

    let (status, body) = get(app, "/api/vehicles/phantom").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_category_routes() {
    let (app, _) = create_test_app();

    let (status, counts) = get(app.clone(), "/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(counts["all"], 16);
    assert_eq!(counts["sports"], 4);
    assert_eq!(counts["concept"], 3);

    let (status, body) = get(app.clone(), "/api/categories/SEDAN/vehicles?year=2023").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["regent-lwb"]);

    let (status, _) = get(app, "/api/categories/boats/vehicles").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_facets() {
    let (app, _) = create_test_app();
    let (status, body) = get(app, "/api/facets").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["years"][0], 2026);
    assert_eq!(body["price"]["min"], 45000);
    assert_eq!(body["fuel_types"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_contact_submission() {
    let (app, inbox) = create_test_app();
    let (status, body) = post_contact(
        app,
        "203.0.113.7",
        json!({
            "name": "Jordan Lee",
            "email": "jordan@example.com",
            "phone": "+1 (555) 010-2030",
            "vehicle_id": "nebula-one",
            "message": "Is the Nebula One available for a private viewing?"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let stored = inbox.inquiries().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(body["data"]["id"], stored[0].id.to_string());
}

#[tokio::test]
async fn test_contact_validation_errors() {
    let (app, inbox) = create_test_app();
    let (status, body) = post_contact(
        app,
        "203.0.113.8",
        json!({
            "name": "J",
            "email": "jordan",
            "message": "Hi"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(inbox.inquiries().await.is_empty());
}

#[tokio::test]
async fn test_contact_accepts_any_catalog_id() {
    let mut vehicles = Catalog::seeded().vehicles().to_vec();
    vehicles[0].id = "GT_Turismo-2023".to_string();
    let (app, inbox) = create_test_app_with(Catalog::new(vehicles).unwrap());

    let (status, body) = post_contact(
        app,
        "203.0.113.9",
        json!({
            "name": "Jordan Lee",
            "email": "jordan@example.com",
            "vehicle_id": "GT_Turismo-2023",
            "message": "Could I book a test drive this weekend?"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(inbox.inquiries().await[0].vehicle_id.as_deref(), Some("GT_Turismo-2023"));
}

#[tokio::test]
async fn test_malformed_contact_body_is_json_error() {
    let (app, inbox) = create_test_app();

    let (status, body) = post_contact_raw(app.clone(), "203.0.113.10", "{ not json".to_string()).await;
    assert!(status.is_client_error());
    assert_eq!(body["code"], "BAD_REQUEST");

    let (status, body) = post_contact(app, "203.0.113.11", json!({ "name": "Jordan Lee" })).await;
    assert!(status.is_client_error());
    assert_eq!(body["code"], "BAD_REQUEST");

    assert!(inbox.inquiries().await.is_empty());
}

#[tokio::test]
async fn test_contact_is_rate_limited_per_ip() {
    let (app, _) = create_test_app();
    let inquiry = json!({
        "name": "Jordan Lee",
        "email": "jordan@example.com",
        "message": "Please send me the brochure."
    });

    for _ in 0..2 {
        let (status, _) = post_contact(app.clone(), "198.51.100.1", inquiry.clone()).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = post_contact(app.clone(), "198.51.100.1", inquiry.clone()).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["code"], "RATE_LIMIT_EXCEEDED");

    let (status, _) = post_contact(app, "198.51.100.2", inquiry).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let (app, _) = create_test_app();
    let (status, _) = get(app, "/api/dealers").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
