//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle for the analytical endpoints
//! and the cache administration endpoints, including cache hit/miss
//! behavior observed through the demo warehouse's query counter.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use sme_analytics::analytics::DemoWarehouse;
use sme_analytics::{api::create_router, AppState, Config};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> (Router, Arc<DemoWarehouse>) {
    let warehouse = Arc::new(DemoWarehouse::new());
    let state = AppState::new(&Config::default(), warehouse.clone());
    (create_router(state), warehouse)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _) = create_test_app();

    let (status, json) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["cache_entries"], 0);
    assert!(json.get("timestamp").is_some());
}

// == Analytics Endpoint Tests ==

#[tokio::test]
async fn test_overview_endpoint_returns_summary() {
    let (app, _) = create_test_app();

    let (status, json) = get(&app, "/api/analytics/overview?user_id=u1&days=30").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["period_days"], 30);
    assert!(json.get("total_revenue").is_some());
    assert!(json.get("net_profit").is_some());
}

#[tokio::test]
async fn test_repeated_request_served_from_cache() {
    let (app, warehouse) = create_test_app();

    let (_, first) = get(&app, "/api/analytics/overview?user_id=u1&days=30").await;
    let (_, second) = get(&app, "/api/analytics/overview?user_id=u1&days=30").await;

    assert_eq!(first, second);
    assert_eq!(warehouse.queries_executed(), 1);
}

#[tokio::test]
async fn test_query_param_order_does_not_matter() {
    let (app, warehouse) = create_test_app();

    let (_, first) = get(&app, "/api/analytics/overview?user_id=u1&days=30").await;
    let (_, second) = get(&app, "/api/analytics/overview?days=30&user_id=u1").await;

    assert_eq!(first, second);
    assert_eq!(warehouse.queries_executed(), 1);
}

#[tokio::test]
async fn test_different_params_are_isolated() {
    let (app, warehouse) = create_test_app();

    get(&app, "/api/analytics/overview?user_id=u1&days=30").await;
    get(&app, "/api/analytics/overview?user_id=u1&days=7").await;
    get(&app, "/api/analytics/overview?user_id=u2&days=30").await;

    assert_eq!(warehouse.queries_executed(), 3);
}

#[tokio::test]
async fn test_revenue_trends_endpoint() {
    let (app, _) = create_test_app();

    let (status, json) = get(&app, "/api/analytics/revenue-trends?user_id=u1&months=6").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["series"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_top_products_endpoint() {
    let (app, _) = create_test_app();

    let (status, json) = get(&app, "/api/analytics/top-products?user_id=u1&limit=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["products"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_invalid_request_returns_error_json() {
    let (app, _) = create_test_app();

    let (status, json) = get(&app, "/api/analytics/overview?user_id=u1&days=999").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("days"));
}

// == Cache Administration Tests ==

#[tokio::test]
async fn test_cache_stats_reflect_requests() {
    let (app, _) = create_test_app();

    get(&app, "/api/analytics/overview?user_id=u1&days=30").await; // miss
    get(&app, "/api/analytics/overview?user_id=u1&days=30").await; // hit

    let (status, json) = get(&app, "/api/cache/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["entry_count"], 1);
    assert_eq!(json["ttl_seconds"], 300);
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
}

#[tokio::test]
async fn test_cache_stats_empty_store_has_zero_ages() {
    let (app, _) = create_test_app();

    let (_, json) = get(&app, "/api/cache/stats").await;
    assert_eq!(json["entry_count"], 0);
    assert_eq!(json["average_age_seconds"], 0.0);
    assert_eq!(json["max_age_seconds"], 0);
}

#[tokio::test]
async fn test_cache_clear_endpoint() {
    let (app, warehouse) = create_test_app();

    get(&app, "/api/analytics/overview?user_id=u1&days=30").await;

    let (status, json) = post(&app, "/api/cache/clear").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["entries_removed"], 1);

    let (_, stats) = get(&app, "/api/cache/stats").await;
    assert_eq!(stats["entry_count"], 0);

    // The next identical request recomputes.
    get(&app, "/api/analytics/overview?user_id=u1&days=30").await;
    assert_eq!(warehouse.queries_executed(), 2);
}

#[tokio::test]
async fn test_cache_warm_endpoint() {
    let (app, warehouse) = create_test_app();

    let (status, json) = post(&app, "/api/cache/warm").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "complete");
    assert_eq!(json["users_warmed"], 3);

    // Warmed queries hit without reaching the warehouse again.
    let before = warehouse.queries_executed();
    get(&app, "/api/analytics/overview?user_id=demo-user-001&days=30").await;
    assert_eq!(warehouse.queries_executed(), before);
}

// == TTL Expiry Test ==

#[tokio::test]
async fn test_expired_entry_recomputed() {
    let warehouse = Arc::new(DemoWarehouse::new());
    let config = Config {
        cache_ttl_seconds: 1,
        ..Config::default()
    };
    let state = AppState::new(&config, warehouse.clone());
    let app = create_router(state);

    get(&app, "/api/analytics/overview?user_id=u1&days=30").await;
    assert_eq!(warehouse.queries_executed(), 1);

    // Within the TTL the cache answers.
    get(&app, "/api/analytics/overview?user_id=u1&days=30").await;
    assert_eq!(warehouse.queries_executed(), 1);

    sleep(Duration::from_millis(1100)).await;

    // Past the TTL the entry is stale and the warehouse runs again.
    get(&app, "/api/analytics/overview?user_id=u1&days=30").await;
    assert_eq!(warehouse.queries_executed(), 2);
}

// == Cache Disabled Test ==

#[tokio::test]
async fn test_cache_disabled_every_request_recomputes() {
    let warehouse = Arc::new(DemoWarehouse::new());
    let config = Config {
        enable_cache: false,
        ..Config::default()
    };
    let state = AppState::new(&config, warehouse.clone());
    let app = create_router(state);

    get(&app, "/api/analytics/overview?user_id=u1&days=30").await;
    get(&app, "/api/analytics/overview?user_id=u1&days=30").await;

    assert_eq!(warehouse.queries_executed(), 2);
}
