//! Cache Module
//!
//! Provides an in-memory response cache with periodic time-based eviction.

mod entry;
mod stats;
mod store;
mod timed;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;
pub use timed::TimedCache;

pub(crate) use store::lock_store;

use std::time::Duration;

// == Public Constants ==
/// Default age after which an entry becomes eligible for eviction
pub const DEFAULT_CACHE_INTERVAL: Duration = Duration::from_secs(120);

/// Smallest sweep period accepted by [`TimedCache::new`]
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

/// Largest sweep period accepted by [`TimedCache::new`]
pub const MAX_SWEEP_INTERVAL: Duration = Duration::from_secs(365 * 24 * 60 * 60);
