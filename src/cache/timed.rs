//! Timed Cache Module
//!
//! Shared, thread-safe response cache whose entries are reaped by a background sweep.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::cache::{lock_store, CacheStats, CacheStore, MAX_SWEEP_INTERVAL, MIN_SWEEP_INTERVAL};
use crate::tasks::spawn_sweep_task;

// == Timed Cache ==
/// Handle to a time-bounded cache of response bodies keyed by request URL.
///
/// Cloning the handle is cheap; all clones share one map and one sweep task.
/// [`get`](Self::get) and [`put`](Self::put) only hold the lock for the single
/// map operation and never wait on the sweep beyond that.
///
/// Reads do not look at entry age. An entry older than the interval stays
/// readable until the next sweep tick removes it.
#[derive(Debug, Clone)]
pub struct TimedCache {
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    shutdown_tx: Arc<watch::Sender<bool>>,
    sweeper: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl TimedCache {
    // == Constructor ==
    /// Creates an empty cache and starts its sweep task.
    ///
    /// The sweep first fires one `interval` after construction, then every
    /// `interval` after that. A zero interval is raised to
    /// [`MIN_SWEEP_INTERVAL`] and anything longer than [`MAX_SWEEP_INTERVAL`]
    /// is lowered to it.
    ///
    /// The task stops on [`shutdown`](Self::shutdown) or once every handle to
    /// the cache has been dropped.
    ///
    /// # Panics
    /// Panics if called outside a Tokio runtime, since the sweep task is
    /// started with `tokio::spawn`.
    pub fn new(interval: Duration) -> Self {
        let interval = if interval.is_zero() {
            warn!(
                "Cache interval of zero is not supported, using {:?}",
                MIN_SWEEP_INTERVAL
            );
            MIN_SWEEP_INTERVAL
        } else if interval > MAX_SWEEP_INTERVAL {
            warn!(
                "Cache interval of {:?} is too long, using {:?}",
                interval, MAX_SWEEP_INTERVAL
            );
            MAX_SWEEP_INTERVAL
        } else {
            interval
        };

        let store = Arc::new(Mutex::new(CacheStore::new()));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = spawn_sweep_task(store.clone(), interval, shutdown_rx);

        Self {
            store,
            interval,
            shutdown_tx: Arc::new(shutdown_tx),
            sweeper: Arc::new(Mutex::new(Some(handle))),
        }
    }

    // == Put ==
    /// Inserts or overwrites the entry for `key`, stamped with the current time.
    pub fn put(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        lock_store(&self.store).put(key.into(), value.into());
    }

    // == Get ==
    /// Returns the bytes stored under `key`, or `None` on a miss.
    ///
    /// A key that was never inserted and a key that has been reaped are
    /// indistinguishable.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        lock_store(&self.store).get(key)
    }

    // == Accessors ==
    /// Returns the configured sweep interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the number of entries currently held, stale ones included.
    pub fn len(&self) -> usize {
        lock_store(&self.store).len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        lock_store(&self.store).is_empty()
    }

    /// Returns a snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        lock_store(&self.store).stats()
    }

    // == Sweep Lifecycle ==
    /// Returns true while the sweep task is running.
    pub fn is_sweeping(&self) -> bool {
        self.sweeper
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stops the sweep task and waits for it to exit.
    ///
    /// Entries already stored stay readable but are no longer reaped. Calling
    /// this more than once, or from several clones, is harmless.
    pub async fn shutdown(&self) {
        self.shutdown_tx.send_replace(true);

        let handle = self
            .sweeper
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(handle) = handle {
            if let Err(err) = handle.await {
                warn!(error = %err, "Cache sweep task ended abnormally");
            }
            info!("Cache sweep task stopped");
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_secs(120);

    #[tokio::test]
    async fn test_put_then_get() {
        let cache = TimedCache::new(INTERVAL);

        cache.put("loc:area1", b"A".to_vec());

        assert_eq!(cache.get("loc:area1"), Some(b"A".to_vec()));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_get_never_inserted() {
        let cache = TimedCache::new(INTERVAL);

        assert_eq!(cache.get("missing"), None);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_overwrite_returns_latest() {
        let cache = TimedCache::new(INTERVAL);

        cache.put("key", b"v1".to_vec());
        cache.put("key", b"v2".to_vec());

        assert_eq!(cache.get("key"), Some(b"v2".to_vec()));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let cache = TimedCache::new(INTERVAL);
        let other = cache.clone();

        cache.put("shared", "value");

        assert_eq!(other.get("shared"), Some(b"value".to_vec()));
    }

    #[tokio::test]
    async fn test_stats_track_lookups() {
        let cache = TimedCache::new(INTERVAL);

        cache.put("key", "value");
        cache.get("key");
        cache.get("other");

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[tokio::test]
    async fn test_zero_interval_is_clamped() {
        let cache = TimedCache::new(Duration::ZERO);

        assert_eq!(cache.interval(), MIN_SWEEP_INTERVAL);
        cache.shutdown().await;
    }

    #[tokio::test]
    async fn test_huge_interval_is_clamped() {
        let cache = TimedCache::new(Duration::from_secs(u64::MAX));

        assert_eq!(cache.interval(), MAX_SWEEP_INTERVAL);
        cache.put("key", "value");
        assert_eq!(cache.get("key"), Some(b"value".to_vec()));
        cache.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_entry_readable_until_swept() {
        let interval = Duration::from_secs(60);
        let cache = TimedCache::new(interval);
        cache.put("key", "value");

        // Tick at 60s sees an age of exactly one interval; at 90s the entry
        // is stale but the next sweep has not run yet
        tokio::time::sleep(Duration::from_secs(90)).await;
        assert_eq!(cache.get("key"), Some(b"value".to_vec()));

        // Tick at 120s reaps it
        tokio::time::sleep(Duration::from_secs(31)).await;
        assert_eq!(cache.get("key"), None);
    }

    #[tokio::test]
    async fn test_shutdown_stops_sweeper() {
        let cache = TimedCache::new(INTERVAL);
        assert!(cache.is_sweeping());

        cache.shutdown().await;
        assert!(!cache.is_sweeping());

        // Second call is a no-op
        cache.shutdown().await;
    }
}
