//! Analytics Service Module
//!
//! The analytical operations the HTTP layer exposes, each wrapped in the
//! result cache under a stable operation name. Every operation follows
//! the same contract: look up the cache with the exact parameter mapping
//! that determines its output, compute via the warehouse on a miss, and
//! store the fresh result before returning it. A warehouse failure
//! propagates unchanged and nothing is stored.

use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

use crate::analytics::Warehouse;
use crate::cache::ResultCache;
use crate::error::Result;

// == Analytics Service ==
/// Cached facade over the analytical warehouse.
///
/// Owns nothing ambient: the cache instance is injected at construction,
/// so tests build isolated services with isolated caches.
pub struct AnalyticsService {
    cache: Arc<ResultCache>,
    warehouse: Arc<dyn Warehouse>,
    cache_enabled: bool,
}

impl AnalyticsService {
    // == Constructor ==
    /// Creates a service over the given cache and warehouse.
    ///
    /// # Arguments
    /// * `cache` - Shared result cache, already configured with its TTL
    /// * `warehouse` - Backend that computes results on cache misses
    /// * `cache_enabled` - When false every call takes the expensive path
    pub fn new(cache: Arc<ResultCache>, warehouse: Arc<dyn Warehouse>, cache_enabled: bool) -> Self {
        Self {
            cache,
            warehouse,
            cache_enabled,
        }
    }

    // == Operations ==
    /// Revenue/expense/profit summary over the trailing `days`.
    pub fn overview(&self, user_id: &str, days: u32) -> Result<Value> {
        let params = json!({"user_id": user_id, "days": days});
        self.cached("overview", &params, || self.warehouse.overview(user_id, days))
    }

    /// Monthly revenue series over the trailing `months`.
    pub fn revenue_trends(&self, user_id: &str, months: u32) -> Result<Value> {
        let params = json!({"user_id": user_id, "months": months});
        self.cached("revenue_trends", &params, || {
            self.warehouse.revenue_trends(user_id, months)
        })
    }

    /// Best-selling products, at most `limit` of them.
    pub fn top_products(&self, user_id: &str, limit: u32) -> Result<Value> {
        let params = json!({"user_id": user_id, "limit": limit});
        self.cached("top_products", &params, || {
            self.warehouse.top_products(user_id, limit)
        })
    }

    // == Cache Warm-Up ==
    /// Pre-computes the common queries for every known user.
    ///
    /// Individual failures are skipped so one bad user never aborts the
    /// warm-up. Returns the number of users fully warmed.
    pub fn warm_cache(&self) -> Result<usize> {
        let users = self.warehouse.user_ids()?;
        let mut warmed = 0;

        for user_id in &users {
            let result = self
                .overview(user_id, 30)
                .and_then(|_| self.revenue_trends(user_id, 6))
                .and_then(|_| self.top_products(user_id, 10));
            match result {
                Ok(_) => warmed += 1,
                Err(error) => {
                    debug!(user_id = %user_id, %error, "skipping user during cache warm-up");
                }
            }
        }

        Ok(warmed)
    }

    // == Caller Contract ==
    /// get → compute on miss → set, under one stable operation name.
    fn cached<F>(&self, operation: &str, params: &Value, compute: F) -> Result<Value>
    where
        F: FnOnce() -> Result<Value>,
    {
        if !self.cache_enabled {
            return compute();
        }

        if let Some(value) = self.cache.get(operation, params) {
            debug!(operation, "cache hit");
            return Ok(value);
        }

        debug!(operation, "cache miss, computing");
        let value = compute()?;
        self.cache.set(operation, params, value.clone());
        Ok(value)
    }
}
