//! Cache Entry Module
//!
//! Defines the structure stored per fingerprint: the computed result
//! plus its creation timestamp. Freshness is judged lazily on read
//! against the cache-wide TTL.

use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cached query result.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The computed result (scalar, mapping, or ordered sequence)
    pub value: Value,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
}

impl CacheEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(value: Value) -> Self {
        Self {
            value,
            created_at: current_timestamp_ms(),
        }
    }

    /// Returns the entry's age in whole seconds as of `now_ms`.
    pub fn age_seconds(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.created_at) / 1000
    }

    // == Is Fresh ==
    /// Whether the entry is still servable under the given TTL.
    ///
    /// Boundary condition: an entry whose age equals the TTL is already
    /// stale. Freshness requires age strictly less than `ttl_seconds`.
    pub fn is_fresh(&self, ttl_seconds: u64, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.created_at) < ttl_seconds * 1000
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(json!({"total_revenue": 1000}));
        assert_eq!(entry.value, json!({"total_revenue": 1000}));
        assert!(entry.created_at > 0);
    }

    #[test]
    fn test_entry_fresh_immediately() {
        let entry = CacheEntry::new(json!(42));
        assert!(entry.is_fresh(5, current_timestamp_ms()));
    }

    #[test]
    fn test_entry_stale_after_ttl() {
        let entry = CacheEntry::new(json!(42));
        let later = entry.created_at + 6_000;
        assert!(!entry.is_fresh(5, later));
    }

    #[test]
    fn test_freshness_boundary_condition() {
        let entry = CacheEntry::new(json!(42));

        // Age exactly equal to the TTL counts as stale.
        let exactly_ttl = entry.created_at + 5_000;
        assert!(!entry.is_fresh(5, exactly_ttl));

        // One millisecond short of the TTL is still fresh.
        let just_under = entry.created_at + 4_999;
        assert!(entry.is_fresh(5, just_under));
    }

    #[test]
    fn test_age_seconds() {
        let entry = CacheEntry::new(json!(null));
        assert_eq!(entry.age_seconds(entry.created_at + 2_500), 2);
        assert_eq!(entry.age_seconds(entry.created_at), 0);
    }

    #[test]
    fn test_age_seconds_clock_regression() {
        // A clock that moved backwards must not underflow.
        let entry = CacheEntry::new(json!(null));
        assert_eq!(entry.age_seconds(entry.created_at.saturating_sub(10)), 0);
    }
}
