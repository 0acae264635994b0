//! Cache Entry Module
//!
//! Defines the structure for individual cache entries stamped with their insertion time.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cached response body with its insertion timestamp.
///
/// Entries are never mutated in place. Re-inserting a key replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored bytes
    pub value: Vec<u8>,
    /// Insertion timestamp
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self::with_created_at(value, Instant::now())
    }

    /// Creates a cache entry with an explicit insertion timestamp.
    pub fn with_created_at(value: Vec<u8>, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Is Stale ==
    /// Checks whether the entry is older than `interval` as of `now`.
    ///
    /// Boundary condition: an entry whose age is exactly `interval` is still live.
    /// It only becomes stale once `now` is strictly after `created_at + interval`.
    /// An expiry past the end of the clock never comes, so such an entry is never stale.
    pub fn is_stale(&self, interval: Duration, now: Instant) -> bool {
        self.created_at
            .checked_add(interval)
            .is_some_and(|expires_at| now > expires_at)
    }

    // == Age ==
    /// Returns how long ago the entry was inserted, as of `now`.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }
}
