//! Cache Sweep Task
//!
//! Background task that periodically removes stale cache entries.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::{lock_store, CacheStore, MAX_SWEEP_INTERVAL};

/// Spawns a background task that reaps entries older than `interval`.
///
/// The first sweep happens one `interval` after this call, then every
/// `interval` until `shutdown_rx` observes `true` or its sender is dropped.
/// The store lock is held only while reaping and never across an await point.
/// The tick period is capped at [`MAX_SWEEP_INTERVAL`].
///
/// # Arguments
/// * `store` - Shared store to sweep
/// * `interval` - Both the sweep period and the maximum entry age
/// * `shutdown_rx` - Stop signal
///
/// # Returns
/// A JoinHandle for the spawned task.
pub fn spawn_sweep_task(
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    let period = interval.min(MAX_SWEEP_INTERVAL);
    let first_tick = Instant::now() + period;

    tokio::spawn(async move {
        debug!(interval_ms = interval.as_millis() as u64, "Starting cache sweep task");

        let mut ticker = tokio::time::interval_at(first_tick, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        debug!("Cache sweep task shutting down");
                        return;
                    }
                }
                _ = ticker.tick() => {
                    let (removed, remaining) = {
                        let mut guard = lock_store(&store);
                        let removed = guard.reap(interval, Instant::now());
                        (removed, guard.len())
                    };

                    if removed > 0 {
                        info!(removed, remaining, "Cache sweep removed stale entries");
                    } else {
                        debug!(remaining, "Cache sweep found no stale entries");
                    }
                }
            }
        }
    })
}
