//! Warehouse Module
//!
//! Seam to the analytical data store. The production deployment points
//! this trait at the real warehouse; the bundled demo implementation
//! serves deterministic sample figures so the server and the tests run
//! self-contained.

use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Result;

// == Warehouse Trait ==
/// Executes the expensive analytical aggregations the result cache
/// fronts. Implementations are shared across request handlers.
pub trait Warehouse: Send + Sync {
    /// Revenue/expense/profit summary over the trailing `days`.
    fn overview(&self, user_id: &str, days: u32) -> Result<Value>;

    /// Monthly revenue series over the trailing `months`.
    fn revenue_trends(&self, user_id: &str, months: u32) -> Result<Value>;

    /// Best-selling products, at most `limit` of them.
    fn top_products(&self, user_id: &str, limit: u32) -> Result<Value>;

    /// Known user ids, used by the cache warm-up endpoint.
    fn user_ids(&self) -> Result<Vec<String>>;
}

// == Demo Warehouse ==
/// In-memory stand-in that derives stable figures from the user id, so
/// repeated queries with the same parameters return identical results.
/// Counts executed queries so tests can observe cache effectiveness.
#[derive(Debug, Default)]
pub struct DemoWarehouse {
    queries_executed: AtomicU64,
}

impl DemoWarehouse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queries that actually ran (cache hits never reach here).
    pub fn queries_executed(&self) -> u64 {
        self.queries_executed.load(Ordering::Relaxed)
    }

    /// Stable per-user seed derived from the id's bytes.
    fn seed(user_id: &str) -> u64 {
        user_id
            .bytes()
            .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64))
    }

    fn record_query(&self) {
        self.queries_executed.fetch_add(1, Ordering::Relaxed);
    }
}

impl Warehouse for DemoWarehouse {
    fn overview(&self, user_id: &str, days: u32) -> Result<Value> {
        self.record_query();
        let seed = Self::seed(user_id);
        let revenue = 500 + (seed % 10_000) * days as u64 / 30;
        let expenses = revenue * 6 / 10;
        Ok(json!({
            "period_days": days,
            "total_revenue": revenue,
            "total_expenses": expenses,
            "net_profit": revenue - expenses,
            "transaction_count": 10 + seed % 400,
        }))
    }

    fn revenue_trends(&self, user_id: &str, months: u32) -> Result<Value> {
        self.record_query();
        let seed = Self::seed(user_id);
        let series: Vec<Value> = (1..=months)
            .map(|offset| {
                let revenue = 400 + (seed.wrapping_add(offset as u64 * 97)) % 8_000;
                json!({"months_ago": months - offset, "revenue": revenue})
            })
            .collect();
        Ok(json!({"months": months, "series": series}))
    }

    fn top_products(&self, user_id: &str, limit: u32) -> Result<Value> {
        self.record_query();
        let seed = Self::seed(user_id);
        let products: Vec<Value> = (0..limit)
            .map(|rank| {
                let units = 500u64.saturating_sub(rank as u64 * 37)
                    + (seed.wrapping_add(rank as u64)) % 50;
                json!({
                    "rank": rank + 1,
                    "product": format!("product-{}", seed.wrapping_add(rank as u64) % 1000),
                    "units_sold": units,
                })
            })
            .collect();
        Ok(json!({"limit": limit, "products": products}))
    }

    fn user_ids(&self) -> Result<Vec<String>> {
        Ok(vec![
            "demo-user-001".to_string(),
            "demo-user-002".to_string(),
            "demo-user-003".to_string(),
        ])
    }
}
