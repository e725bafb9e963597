//! Cache Module
//!
//! Fingerprint-keyed, TTL-bounded in-memory cache for analytical query
//! results. Single-process only: no persistence, no cross-process
//! coherency, reset to empty on restart.

mod entry;
mod fingerprint;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use fingerprint::{fingerprint, Fingerprint};
pub use stats::CacheStats;
pub use store::ResultCache;

// == Public Constants ==
/// Default freshness window in seconds
pub const DEFAULT_TTL_SECONDS: u64 = 300;
