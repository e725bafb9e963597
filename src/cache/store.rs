//! Result Cache Module
//!
//! In-memory, TTL-bounded cache for analytical query results, keyed by
//! deterministic fingerprints of (operation name, parameters).
//!
//! The store is unbounded in entry count and scoped to the process
//! lifetime. Expiry is evaluated lazily on read: a stale entry is ignored,
//! not purged, and is effectively evicted when the caller writes a
//! replacement under the same fingerprint. Concurrent writers to one
//! fingerprint resolve last-write-wins; there is no single-flight
//! coalescing, so two callers missing at the same time both recompute
//! and both results are equally valid.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::cache::entry::{current_timestamp_ms, CacheEntry};
use crate::cache::{fingerprint, CacheStats, Fingerprint};

// == Result Cache ==
/// Fingerprint-keyed result store with a fixed freshness window.
///
/// Internally synchronized; all methods take `&self` and are
/// non-blocking, so one instance is shared across request handlers
/// behind an `Arc`.
#[derive(Debug)]
pub struct ResultCache {
    /// Fingerprint-keyed storage
    entries: RwLock<HashMap<Fingerprint, CacheEntry>>,
    /// Maximum age in seconds during which an entry is fresh
    ttl_seconds: u64,
    /// Fresh lookups served
    hits: AtomicU64,
    /// Lookups that fell through (absent or stale)
    misses: AtomicU64,
}

impl ResultCache {
    // == Constructor ==
    /// Creates an empty cache with the given freshness window.
    ///
    /// # Arguments
    /// * `ttl_seconds` - Maximum age in seconds during which a stored
    ///   entry is considered fresh; fixed for the cache's lifetime
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl_seconds,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns the configured freshness window in seconds.
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    // == Get ==
    /// Looks up a fresh result for (operation, parameters).
    ///
    /// Returns `None` when no entry exists for the fingerprint or when
    /// the stored entry's age has reached the TTL. Stale entries are left
    /// in place; the caller's subsequent `set` overwrites them.
    ///
    /// # Arguments
    /// * `operation` - Stable name of the analytical operation
    /// * `params` - The exact parameter mapping that determines the result
    pub fn get(&self, operation: &str, params: &Value) -> Option<Value> {
        let key = fingerprint(operation, params);
        let now_ms = current_timestamp_ms();

        let entries = read_guard(&self.entries);
        match entries.get(&key) {
            Some(entry) if entry.is_fresh(self.ttl_seconds, now_ms) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(entry.value.clone())
            }
            _ => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    // == Set ==
    /// Stores a freshly computed result, replacing any prior entry for
    /// the same fingerprint unconditionally (last write wins).
    ///
    /// # Arguments
    /// * `operation` - Stable name of the analytical operation
    /// * `params` - The exact parameter mapping passed to `get`
    /// * `value` - The result just computed by the expensive path
    pub fn set(&self, operation: &str, params: &Value, value: Value) {
        let key = fingerprint(operation, params);
        let mut entries = write_guard(&self.entries);
        entries.insert(key, CacheEntry::new(value));
    }

    // == Clear ==
    /// Removes every entry. Administrative reset; immediate and
    /// unconditional. Returns the number of entries removed.
    pub fn clear(&self) -> usize {
        let mut entries = write_guard(&self.entries);
        let removed = entries.len();
        entries.clear();
        removed
    }

    // == Stats ==
    /// Snapshot of raw store occupancy at call time.
    ///
    /// Does not filter by freshness: stale entries that have not been
    /// overwritten still count, and their ages feed the averages.
    pub fn stats(&self) -> CacheStats {
        let now_ms = current_timestamp_ms();
        let entries = read_guard(&self.entries);

        let entry_count = entries.len();
        let mut total_age: u64 = 0;
        let mut max_age: u64 = 0;
        for entry in entries.values() {
            let age = entry.age_seconds(now_ms);
            total_age += age;
            max_age = max_age.max(age);
        }
        let average_age_seconds = if entry_count == 0 {
            0.0
        } else {
            total_age as f64 / entry_count as f64
        };

        CacheStats {
            entry_count,
            ttl_seconds: self.ttl_seconds,
            average_age_seconds,
            max_age_seconds: max_age,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    // == Purge Expired ==
    /// Removes entries whose age has reached the TTL.
    ///
    /// Memory hygiene for long-running processes; lazy read-side expiry
    /// remains the correctness mechanism. Returns the number removed.
    pub fn purge_expired(&self) -> usize {
        let now_ms = current_timestamp_ms();
        let mut entries = write_guard(&self.entries);
        let before = entries.len();
        entries.retain(|_, entry| entry.is_fresh(self.ttl_seconds, now_ms));
        before - entries.len()
    }

    // == Length ==
    /// Returns the current number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        read_guard(&self.entries).len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        read_guard(&self.entries).is_empty()
    }

    // == Test Support ==
    /// Rewinds an entry's creation time by `seconds`, simulating clock
    /// advance for TTL-boundary tests.
    #[cfg(test)]
    pub(crate) fn backdate(&self, operation: &str, params: &Value, seconds: u64) {
        let key = fingerprint(operation, params);
        let mut entries = write_guard(&self.entries);
        if let Some(entry) = entries.get_mut(&key) {
            entry.created_at = entry.created_at.saturating_sub(seconds * 1000);
        }
    }
}

// == Lock Helpers ==
// A poisoned lock only means another thread panicked while holding it;
// the map itself is never left structurally inconsistent by any of the
// operations above, so the data is taken as-is rather than propagating
// the poison to every caller.
fn read_guard<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_guard<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}
