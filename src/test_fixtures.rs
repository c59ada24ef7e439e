//! JSON fixtures and helpers shared by unit tests.

use crate::api::CatalogClient;
use crate::config::ClientConfig;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Client pointed at a mock server
pub fn client_for(server: &MockServer) -> CatalogClient {
    init_logging();
    CatalogClient::new(ClientConfig::default().with_base_url(server.uri())).unwrap()
}

/// Minimal `/pokemon/{id}` payload with slot-ordered types
pub fn pokemon_json(id: u32, name: &str, types: &[&str]) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(i, t)| json!({ "slot": i + 1, "type": { "name": t, "url": "" } }))
        .collect();

    json!({
        "id": id,
        "name": name,
        "height": 7,
        "weight": 69,
        "order": id,
        "base_experience": 64,
        "sprites": {
            "front_default": format!("https://img.example/{}.png", id),
            "other": {
                "official-artwork": { "front_default": format!("https://img.example/art/{}.png", id) }
            }
        },
        "types": types,
        "abilities": [
            { "ability": { "name": "chlorophyll", "url": "" }, "is_hidden": true, "slot": 3 },
            { "ability": { "name": "overgrow", "url": "" }, "is_hidden": false, "slot": 1 }
        ],
        "stats": [
            { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 49, "effort": 0, "stat": { "name": "attack", "url": "" } }
        ],
        "moves": []
    })
}

pub fn species_json(id: u32, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "color": { "name": "green", "url": "" },
        "habitat": { "name": "grassland", "url": "" },
        "flavor_text_entries": [
            { "flavor_text": "Una rara semilla.", "language": { "name": "es", "url": "" } },
            { "flavor_text": "A strange seed was\nplanted on its\u{000c}back at birth.", "language": { "name": "en", "url": "" } }
        ],
        "genera": [
            { "genus": "Seed Pokémon", "language": { "name": "en", "url": "" } }
        ],
        "is_legendary": false,
        "is_mythical": false,
        "evolution_chain": { "url": "https://pokeapi.co/api/v2/evolution-chain/1/" }
    })
}

/// `/pokemon?limit&offset` payload listing `names`
pub fn page_json(count: u64, names: &[&str]) -> Value {
    let results: Vec<Value> = names
        .iter()
        .map(|n| json!({ "name": n, "url": format!("https://pokeapi.co/api/v2/pokemon/{}/", n) }))
        .collect();

    json!({ "count": count, "next": null, "previous": null, "results": results })
}

/// Mount a JSON response on `endpoint` expecting exactly `calls` requests
pub async fn mount_json(server: &MockServer, endpoint: &str, body: Value, calls: u64) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(calls)
        .mount(server)
        .await;
}

/// Mount a JSON response on `endpoint` without checking how often it is hit
pub async fn mount_json_any(server: &MockServer, endpoint: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, endpoint: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
