//! Cache Statistics Module
//!
//! Snapshot of raw store occupancy plus hit/miss counters. Occupancy
//! figures deliberately include logically stale entries that have not
//! been overwritten yet, so operators can see cache pressure and
//! staleness at the same time.

use serde::Serialize;

// == Cache Stats ==
/// Point-in-time view of the result cache.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of stored entries, stale ones included
    pub entry_count: usize,
    /// Configured freshness window in seconds
    pub ttl_seconds: u64,
    /// Mean entry age in seconds (0 when the store is empty)
    pub average_age_seconds: f64,
    /// Oldest entry age in seconds (0 when the store is empty)
    pub max_age_seconds: u64,
    /// Number of fresh lookups served from the store
    pub hits: u64,
    /// Number of lookups that fell through to recomputation
    pub misses: u64,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates hits / (hits + misses), or 0.0 if no lookups occurred.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
