//! API Routes
//!
//! Configures the Axum router with all backend endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_clear_handler, cache_stats_handler, cache_warm_handler, health_handler,
    overview_handler, revenue_trends_handler, top_products_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET  /health` - Liveness with cache occupancy
/// - `GET  /api/analytics/overview` - Revenue/expense/profit summary
/// - `GET  /api/analytics/revenue-trends` - Monthly revenue series
/// - `GET  /api/analytics/top-products` - Best sellers
/// - `GET  /api/cache/stats` - Result cache statistics
/// - `POST /api/cache/clear` - Administrative cache reset
/// - `POST /api/cache/warm` - Pre-compute common queries
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/analytics/overview", get(overview_handler))
        .route("/api/analytics/revenue-trends", get(revenue_trends_handler))
        .route("/api/analytics/top-products", get(top_products_handler))
        .route("/api/cache/stats", get(cache_stats_handler))
        .route("/api/cache/clear", post(cache_clear_handler))
        .route("/api/cache/warm", post(cache_warm_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
