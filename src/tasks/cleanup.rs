//! TTL Sweeper Task
//!
//! Optional background task that periodically removes expired cache entries.
//! Expiration stays correct without it; the sweeper only reclaims slots held by
//! entries nobody has looked at since they expired.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedCache;

/// Spawns a task that sweeps expired entries every `cleanup_interval_secs`.
///
/// Each sweep takes the cache lock once, like any other operation. The
/// returned handle is aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = SharedCache::new(100);
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), 1);
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task(cache: SharedCache, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting TTL sweeper with interval of {} seconds",
            interval.as_secs()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired().await;

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    })
}
