//! Response DTOs for the analytics API
//!
//! Defines the structure of outgoing HTTP response bodies for the cache
//! administration and health endpoints. Analytical endpoints return the
//! computed (or cached) JSON value directly.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the cache stats endpoint (GET /api/cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of stored entries, stale ones included
    pub entry_count: usize,
    /// Configured freshness window in seconds
    pub ttl_seconds: u64,
    /// Mean entry age in seconds
    pub average_age_seconds: f64,
    /// Oldest entry age in seconds
    pub max_age_seconds: u64,
    /// Fresh lookups served from the cache
    pub hits: u64,
    /// Lookups that fell through to the warehouse
    pub misses: u64,
    /// hits / (hits + misses), 0.0 before any lookup
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        let hit_rate = stats.hit_rate();
        Self {
            entry_count: stats.entry_count,
            ttl_seconds: stats.ttl_seconds,
            average_age_seconds: stats.average_age_seconds,
            max_age_seconds: stats.max_age_seconds,
            hits: stats.hits,
            misses: stats.misses,
            hit_rate,
        }
    }
}

/// Response body for the cache clear endpoint (POST /api/cache/clear)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Acknowledgment message
    pub message: String,
    /// Number of entries removed
    pub entries_removed: usize,
}

impl ClearResponse {
    /// Creates the acknowledgment for a completed clear.
    pub fn new(entries_removed: usize) -> Self {
        Self {
            message: format!("Cache cleared, {} entries removed", entries_removed),
            entries_removed,
        }
    }
}

/// Response body for the cache warm endpoint (POST /api/cache/warm)
#[derive(Debug, Clone, Serialize)]
pub struct WarmResponse {
    /// Completion status
    pub status: String,
    /// Number of users whose common queries were pre-computed
    pub users_warmed: usize,
}

impl WarmResponse {
    pub fn complete(users_warmed: usize) -> Self {
        Self {
            status: "complete".to_string(),
            users_warmed,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Current result-cache occupancy
    pub cache_entries: usize,
}

impl HealthResponse {
    /// Creates a healthy response with the current timestamp.
    pub fn healthy(cache_entries: usize) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            cache_entries,
        }
    }
}
