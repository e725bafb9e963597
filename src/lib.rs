//! SME Analytics Backend
//!
//! Analytical aggregation endpoints fronted by a fingerprint-keyed,
//! TTL-bounded in-memory result cache.

pub mod analytics;
pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::ResultCache;
pub use config::Config;
pub use tasks::spawn_sweep_task;
