//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror. The cache itself is total
//! and never produces these; they come from the API client and the REPL.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport-level failure talking to the API
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with something other than 200 OK
    #[error("Unexpected status code {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// Response body was not the JSON we expected
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// `mapb` issued while on the first page
    #[error("you're on the first page")]
    NoPreviousPage,

    /// `map` issued after the last page was shown
    #[error("you're on the last page")]
    NoNextPage,

    /// Input did not name a known command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Command invoked without a required argument
    #[error("missing argument, usage: {usage}")]
    MissingArgument { usage: &'static str },

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;
