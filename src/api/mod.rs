//! API Module
//!
//! PokeAPI client that memoizes responses in a [`TimedCache`](crate::cache::TimedCache).
//!
//! # Endpoints
//! - `GET /location-area?offset=0&limit=N` - A page of location areas
//! - `GET /location-area/{name}` - Pokemon encounters in one area
//! - `GET /pokemon/{name}` - A single Pokemon

pub mod client;

pub use client::PokeApiClient;
