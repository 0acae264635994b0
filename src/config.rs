//! Configuration Module
//!
//! Handles loading and managing Pokedex configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Default PokeAPI root
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Pokedex configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seconds before a cached response becomes eligible for eviction
    pub cache_interval: u64,
    /// Root URL of the PokeAPI, without a trailing slash
    pub api_base_url: String,
    /// Number of location areas per `map` page
    pub page_size: u32,
    /// HTTP request timeout in seconds
    pub request_timeout: u64,
    /// Name shown in the REPL prompt
    pub prompt: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_INTERVAL` - Cache interval in seconds (default: 120)
    /// - `POKEDEX_API_BASE_URL` - PokeAPI root (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_PAGE_SIZE` - Location areas per page (default: 20)
    /// - `POKEDEX_REQUEST_TIMEOUT` - Request timeout in seconds (default: 10)
    /// - `POKEDEX_PROMPT` - REPL prompt name (default: pokedex)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_interval: parse_var("POKEDEX_CACHE_INTERVAL").unwrap_or(defaults.cache_interval),
            api_base_url: env::var("POKEDEX_API_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| normalize_base_url(&v))
                .unwrap_or(defaults.api_base_url),
            page_size: parse_var::<u32>("POKEDEX_PAGE_SIZE")
                .filter(|size| *size > 0)
                .unwrap_or(defaults.page_size),
            request_timeout: parse_var("POKEDEX_REQUEST_TIMEOUT")
                .unwrap_or(defaults.request_timeout),
            prompt: env::var("POKEDEX_PROMPT")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.prompt),
        }
    }

    /// Returns a copy of this config pointed at a different API root.
    pub fn with_api_base_url(mut self, url: &str) -> Self {
        self.api_base_url = normalize_base_url(url);
        self
    }

    // == Accessors ==
    /// Returns the cache sweep interval as a Duration.
    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }

    /// Returns the HTTP request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval: 120,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: 20,
            request_timeout: 10,
            prompt: "pokedex".to_string(),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
