//! Configuration Module
//!
//! Handles loading and managing server configuration from environment
//! variables. The cache TTL is read once at startup and treated as a
//! constant for the cache's lifetime.

use std::env;

use crate::cache::DEFAULT_TTL_SECONDS;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum age in seconds during which a cached result is fresh
    pub cache_ttl_seconds: u64,
    /// Whether analytical operations consult the result cache at all
    pub enable_cache: bool,
    /// HTTP server port
    pub server_port: u16,
    /// Background stale-entry sweep interval in seconds
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECONDS` - Result freshness window (default: 300)
    /// - `ENABLE_CACHE` - Toggle result caching (default: true)
    /// - `SERVER_PORT` - HTTP server port (default: 8007)
    /// - `SWEEP_INTERVAL_SECONDS` - Stale-entry sweep frequency (default: 60)
    pub fn from_env() -> Self {
        Self {
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECONDS),
            enable_cache: env::var("ENABLE_CACHE")
                .ok()
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(true),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8007),
            sweep_interval: env::var("SWEEP_INTERVAL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_seconds: DEFAULT_TTL_SECONDS,
            enable_cache: true,
            server_port: 8007,
            sweep_interval: 60,
        }
    }
}
