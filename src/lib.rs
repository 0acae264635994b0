//! Pokedex - A command-line Pokedex for the PokeAPI
//!
//! Responses are memoized in a time-bounded cache whose stale entries are
//! removed by a background sweep.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::TimedCache;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Repl;
pub use tasks::spawn_sweep_task;
