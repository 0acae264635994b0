//! In-process stand-in for the PokeAPI used by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pokedex::{Config, PokeApiClient, TimedCache};
use serde_json::{json, Value};

/// Location areas served by the mock, in listing order.
pub const AREAS: &[&str] = &[
    "canalave-city-area",
    "eterna-city-area",
    "pastoria-city-area",
    "sunyshore-city-area",
    "sinnoh-pokemon-league-area",
];

/// Page size the test clients are configured with.
pub const PAGE_SIZE: u32 = 2;

#[derive(Clone)]
struct MockState {
    base_url: String,
    requests: Arc<AtomicUsize>,
}

/// Handle to a running mock server.
pub struct MockPokeApi {
    pub base_url: String,
    requests: Arc<AtomicUsize>,
}

impl MockPokeApi {
    /// Number of HTTP requests the server has answered.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    /// Client config pointed at this server.
    pub fn config(&self) -> Config {
        let mut config = Config::default().with_api_base_url(&self.base_url);
        config.page_size = PAGE_SIZE;
        config.request_timeout = 5;
        config
    }

    /// Client with its own cache using `interval`.
    pub fn client(&self, interval: Duration) -> PokeApiClient {
        PokeApiClient::new(&self.config(), TimedCache::new(interval)).unwrap()
    }
}

// == Server ==
pub async fn spawn_mock_api() -> MockPokeApi {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}/api/v2", addr);
    let requests = Arc::new(AtomicUsize::new(0));

    let state = MockState {
        base_url: base_url.clone(),
        requests: requests.clone(),
    };
    let app = Router::new()
        .route("/api/v2/location-area", get(list_areas))
        .route("/api/v2/location-area/:name", get(area_detail))
        .route("/api/v2/pokemon/:name", get(pokemon_detail))
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockPokeApi { base_url, requests }
}

// == Handlers ==
async fn list_areas(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    state.requests.fetch_add(1, Ordering::SeqCst);

    let offset: usize = params.get("offset").and_then(|v| v.parse().ok()).unwrap_or(0);
    let limit: usize = params.get("limit").and_then(|v| v.parse().ok()).unwrap_or(20);
    let end = (offset + limit).min(AREAS.len());

    let page_url = |offset: usize| {
        format!("{}/location-area?offset={}&limit={}", state.base_url, offset, limit)
    };
    let next = (end < AREAS.len()).then(|| page_url(end));
    let previous = (offset > 0).then(|| page_url(offset.saturating_sub(limit)));

    let results: Vec<Value> = AREAS[offset.min(AREAS.len())..end]
        .iter()
        .enumerate()
        .map(|(i, name)| {
            json!({
                "name": name,
                "url": format!("{}/location-area/{}/", state.base_url, offset + i + 1),
            })
        })
        .collect();

    Json(json!({
        "count": AREAS.len(),
        "next": next,
        "previous": previous,
        "results": results,
    }))
}

async fn area_detail(State(state): State<MockState>, Path(name): Path<String>) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);

    if !AREAS.contains(&name.as_str()) {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    }

    Json(json!({
        "id": 1,
        "name": name,
        "pokemon_encounters": [
            {"pokemon": {"name": "tentacool", "url": "x"}, "version_details": []},
            {"pokemon": {"name": "staryu", "url": "x"}, "version_details": []}
        ]
    }))
    .into_response()
}

async fn pokemon_detail(State(state): State<MockState>, Path(name): Path<String>) -> Response {
    state.requests.fetch_add(1, Ordering::SeqCst);

    let base_experience = match name.as_str() {
        // At or above 300 every throw succeeds
        "mewtwo" => 340,
        "pikachu" => 112,
        // Zero can never be caught
        "shuckle" => 0,
        "broken" => return (StatusCode::OK, "{not json").into_response(),
        _ => return (StatusCode::NOT_FOUND, "Not Found").into_response(),
    };

    Json(json!({
        "id": 1,
        "name": name,
        "height": 20,
        "weight": 1220,
        "base_experience": base_experience,
        "stats": [
            {"base_stat": 106, "effort": 0, "stat": {"name": "hp", "url": "x"}},
            {"base_stat": 154, "effort": 3, "stat": {"name": "special-attack", "url": "x"}}
        ],
        "types": [
            {"slot": 1, "type": {"name": "psychic", "url": "x"}}
        ]
    }))
    .into_response()
}
