//! Request DTOs for the analytics API
//!
//! Query-string parameters for the analytical endpoints. Validation here
//! is the caller-side guard the cache itself does not provide: only
//! well-formed parameter mappings ever reach the fingerprint step.

use serde::Deserialize;

/// Query parameters for GET /api/analytics/overview
#[derive(Debug, Clone, Deserialize)]
pub struct OverviewParams {
    /// Owner of the analyzed transactions
    pub user_id: String,
    /// Trailing window in days (default 30)
    #[serde(default = "default_days")]
    pub days: u32,
}

fn default_days() -> u32 {
    30
}

impl OverviewParams {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.user_id.is_empty() {
            return Some("user_id cannot be empty".to_string());
        }
        if self.days == 0 || self.days > 365 {
            return Some("days must be between 1 and 365".to_string());
        }
        None
    }
}

/// Query parameters for GET /api/analytics/revenue-trends
#[derive(Debug, Clone, Deserialize)]
pub struct TrendsParams {
    pub user_id: String,
    /// Trailing window in months (default 6)
    #[serde(default = "default_months")]
    pub months: u32,
}

fn default_months() -> u32 {
    6
}

impl TrendsParams {
    pub fn validate(&self) -> Option<String> {
        if self.user_id.is_empty() {
            return Some("user_id cannot be empty".to_string());
        }
        if self.months == 0 || self.months > 36 {
            return Some("months must be between 1 and 36".to_string());
        }
        None
    }
}

/// Query parameters for GET /api/analytics/top-products
#[derive(Debug, Clone, Deserialize)]
pub struct TopProductsParams {
    pub user_id: String,
    /// Maximum number of products returned (default 10)
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    10
}

impl TopProductsParams {
    pub fn validate(&self) -> Option<String> {
        if self.user_id.is_empty() {
            return Some("user_id cannot be empty".to_string());
        }
        if self.limit == 0 || self.limit > 100 {
            return Some("limit must be between 1 and 100".to_string());
        }
        None
    }
}
