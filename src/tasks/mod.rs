//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Cache Sweep: Removes stale cache entries at the configured interval

mod sweep;

pub use sweep::spawn_sweep_task;
