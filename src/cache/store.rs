//! Cache Store Module
//!
//! Unsynchronized key/value storage underneath [`TimedCache`](crate::cache::TimedCache).

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Map from request key to cached bytes, plus lookup counters.
///
/// Lookups never consider an entry's age. Stale entries only leave the store
/// through [`CacheStore::reap`].
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Lookup and sweep counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Put ==
    /// Stores `value` under `key`, stamped with the current time.
    ///
    /// An existing entry for `key` is replaced, which resets its age.
    pub fn put(&mut self, key: String, value: Vec<u8>) {
        self.insert_entry(key, CacheEntry::new(value));
    }

    /// Stores a prebuilt entry, keeping its timestamp.
    pub fn insert_entry(&mut self, key: String, entry: CacheEntry) {
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a copy of the bytes stored under `key`, if any.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Reap ==
    /// Removes every entry older than `interval` as of `now`.
    ///
    /// Returns the number of entries removed. Afterwards every remaining entry
    /// satisfies `now - created_at <= interval`.
    pub fn reap(&mut self, interval: Duration, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale(interval, now));
        let removed = before - self.entries.len();

        self.stats.record_reaped(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Locking ==
/// Locks a shared store.
///
/// Every critical section on the store is pure in-memory work that leaves the
/// map consistent, so a poisoned lock is recovered rather than propagated.
pub(crate) fn lock_store(store: &Mutex<CacheStore>) -> MutexGuard<'_, CacheStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}
