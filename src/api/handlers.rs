//! API Handlers
//!
//! HTTP request handlers for the analytical and cache administration
//! endpoints. These are thin wrappers: the cache contract lives in the
//! analytics service, and the admin endpoints merely expose `stats()`
//! and `clear()` as JSON.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::analytics::{AnalyticsService, Warehouse};
use crate::cache::ResultCache;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    ClearResponse, HealthResponse, OverviewParams, StatsResponse, TopProductsParams,
    TrendsParams, WarmResponse,
};

/// Application state shared across all handlers.
///
/// The result cache is constructed once here and injected into the
/// analytics service, never reached through a global.
#[derive(Clone)]
pub struct AppState {
    /// Shared result cache, also consulted directly by the admin endpoints
    pub cache: Arc<ResultCache>,
    /// Cached facade over the warehouse
    pub analytics: Arc<AnalyticsService>,
}

impl AppState {
    /// Creates application state from configuration and a warehouse.
    pub fn new(config: &Config, warehouse: Arc<dyn Warehouse>) -> Self {
        let cache = Arc::new(ResultCache::new(config.cache_ttl_seconds));
        let analytics = Arc::new(AnalyticsService::new(
            cache.clone(),
            warehouse,
            config.enable_cache,
        ));
        Self { cache, analytics }
    }
}

/// Handler for GET /api/analytics/overview
pub async fn overview_handler(
    State(state): State<AppState>,
    Query(params): Query<OverviewParams>,
) -> Result<Json<Value>> {
    if let Some(error_msg) = params.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let value = state.analytics.overview(&params.user_id, params.days)?;
    Ok(Json(value))
}

/// Handler for GET /api/analytics/revenue-trends
pub async fn revenue_trends_handler(
    State(state): State<AppState>,
    Query(params): Query<TrendsParams>,
) -> Result<Json<Value>> {
    if let Some(error_msg) = params.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let value = state
        .analytics
        .revenue_trends(&params.user_id, params.months)?;
    Ok(Json(value))
}

/// Handler for GET /api/analytics/top-products
pub async fn top_products_handler(
    State(state): State<AppState>,
    Query(params): Query<TopProductsParams>,
) -> Result<Json<Value>> {
    if let Some(error_msg) = params.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let value = state.analytics.top_products(&params.user_id, params.limit)?;
    Ok(Json(value))
}

/// Handler for GET /api/cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats()))
}

/// Handler for POST /api/cache/clear
pub async fn cache_clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let removed = state.cache.clear();
    info!(entries_removed = removed, "cache cleared by administrator");
    Json(ClearResponse::new(removed))
}

/// Handler for POST /api/cache/warm
///
/// Warm-up runs every common query for every known user, so it is moved
/// off the async worker threads onto the blocking pool.
pub async fn cache_warm_handler(
    State(state): State<AppState>,
) -> Result<Json<WarmResponse>> {
    let analytics = state.analytics.clone();
    let warmed = tokio::task::spawn_blocking(move || analytics.warm_cache())
        .await
        .map_err(|e| ApiError::Internal(format!("warm-up task failed: {}", e)))??;
    info!(users_warmed = warmed, "cache warm-up complete");
    Ok(Json(WarmResponse::complete(warmed)))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.cache.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::DemoWarehouse;

    fn test_state() -> AppState {
        AppState::new(&Config::default(), Arc::new(DemoWarehouse::new()))
    }

    #[tokio::test]
    async fn test_overview_handler_caches_result() {
        let state = test_state();
        let params = OverviewParams {
            user_id: "u1".to_string(),
            days: 30,
        };

        let first = overview_handler(State(state.clone()), Query(params.clone()))
            .await
            .unwrap();
        let second = overview_handler(State(state.clone()), Query(params))
            .await
            .unwrap();

        assert_eq!(first.0, second.0);
        assert_eq!(state.cache.stats().hits, 1);
    }

    #[tokio::test]
    async fn test_overview_handler_rejects_empty_user() {
        let state = test_state();
        let params = OverviewParams {
            user_id: String::new(),
            days: 30,
        };

        let result = overview_handler(State(state), Query(params)).await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_cache_stats_handler() {
        let state = test_state();
        let response = cache_stats_handler(State(state)).await;
        assert_eq!(response.entry_count, 0);
        assert_eq!(response.ttl_seconds, 300);
    }

    #[tokio::test]
    async fn test_cache_clear_handler_empties_store() {
        let state = test_state();
        state.analytics.overview("u1", 30).unwrap();
        assert_eq!(state.cache.len(), 1);

        let response = cache_clear_handler(State(state.clone())).await;
        assert_eq!(response.entries_removed, 1);
        assert!(state.cache.is_empty());
    }

    #[tokio::test]
    async fn test_cache_warm_handler() {
        let state = test_state();
        let response = cache_warm_handler(State(state.clone())).await.unwrap();
        assert_eq!(response.users_warmed, 3);
        assert_eq!(state.cache.len(), 9);
    }

    #[tokio::test]
    async fn test_health_handler_reports_occupancy() {
        let state = test_state();
        state.analytics.overview("u1", 30).unwrap();

        let response = health_handler(State(state)).await;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.cache_entries, 1);
    }
}
