//! Stale Entry Sweep Task
//!
//! Background task that periodically purges cache entries whose age
//! reached the TTL. Memory hygiene for long-running processes with high
//! fingerprint cardinality; lazy read-side expiry remains the
//! correctness mechanism, so the server is fully correct without this
//! task running.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::ResultCache;

/// Spawns a background task that periodically purges stale cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between purge runs.
///
/// # Arguments
/// * `cache` - Shared result cache
/// * `sweep_interval_secs` - Interval in seconds between purge runs
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
pub fn spawn_sweep_task(cache: Arc<ResultCache>, sweep_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting stale-entry sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            let removed = cache.purge_expired();

            if removed > 0 {
                info!("Sweep: purged {} stale entries", removed);
            } else {
                debug!("Sweep: no stale entries found");
            }
        }
    })
}
