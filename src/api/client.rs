//! PokeAPI Client
//!
//! Fetches PokeAPI resources, serving repeats from the response cache.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cache::TimedCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// HTTP client for the PokeAPI.
///
/// Every successful response is stored in the injected cache under its request
/// URL, so asking for the same URL again within the cache interval does not
/// touch the network. Failed requests are never cached.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    cache: TimedCache,
    base_url: String,
    page_size: u32,
}

impl PokeApiClient {
    // == Constructor ==
    /// Creates a client for `config.api_base_url` that caches into `cache`.
    pub fn new(config: &Config, cache: TimedCache) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            http,
            cache,
            base_url: config.api_base_url.clone(),
            page_size: config.page_size,
        })
    }

    /// Returns the cache this client reads from and writes to.
    pub fn cache(&self) -> &TimedCache {
        &self.cache
    }

    // == URLs ==
    /// URL of the first page of location areas.
    pub fn first_page_url(&self) -> String {
        format!(
            "{}/location-area?offset=0&limit={}",
            self.base_url, self.page_size
        )
    }

    /// URL of a named resource, e.g. `pokemon` + `Pikachu` -> `{base}/pokemon/pikachu`.
    pub fn resource_url(&self, kind: &str, name: &str) -> String {
        format!("{}/{}/{}", self.base_url, kind, canonical_name(name))
    }

    // == Endpoints ==
    /// Fetches a page of location areas.
    ///
    /// `page_url` is a `next`/`previous` link from an earlier page; `None`
    /// fetches the first page.
    pub async fn location_areas(&self, page_url: Option<&str>) -> Result<LocationAreaPage> {
        match page_url {
            Some(url) => self.fetch(url).await,
            None => self.fetch(&self.first_page_url()).await,
        }
    }

    /// Fetches a single location area with its Pokemon encounters.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        self.fetch(&self.resource_url("location-area", name)).await
    }

    /// Fetches a single Pokemon.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.fetch(&self.resource_url("pokemon", name)).await
    }

    // == Fetch ==
    /// Returns the decoded resource at `url`, from the cache when possible.
    ///
    /// On a miss the body must come back with 200 OK and decode as `T`; the
    /// decoded value is then re-serialized and stored under `url`.
    async fn fetch<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned + Serialize,
    {
        if let Some(bytes) = self.cache.get(url) {
            match serde_json::from_slice(&bytes) {
                Ok(value) => {
                    debug!(url, "Cache hit");
                    return Ok(value);
                }
                Err(err) => {
                    warn!(url, error = %err, "Ignoring undecodable cache entry");
                }
            }
        }

        debug!(url, "Cache miss, requesting");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PokedexError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        let value: T = serde_json::from_slice(&body)?;

        match serde_json::to_vec(&value) {
            Ok(bytes) => self.cache.put(url, bytes),
            Err(err) => warn!(url, error = %err, "Response not cached"),
        }

        Ok(value)
    }
}

/// Normalizes a user-supplied resource name the way the PokeAPI expects it.
pub fn canonical_name(name: &str) -> String {
    name.trim().to_lowercase()
}
