//! Tests for CatalogStore::get_summary and CatalogStore::get_detail.

use pretty_assertions::assert_eq;
use wiremock::MockServer;

use super::store_for;
use crate::error::PokedexError;
use crate::store::ListPhase;
use crate::test_fixtures::{mount_json, mount_status, pokemon_json, species_json};

// ── get_summary ──────────────────────────────────────────────────────

#[tokio::test]
async fn get_summary_indexes_by_id() {
    let server = MockServer::start().await;
    mount_json(&server, "/pokemon/pikachu", pokemon_json(25, "pikachu", &["electric"]), 1).await;
    let store = store_for(&server);

    let summary = store.get_summary("Pikachu").await.unwrap();

    assert_eq!(summary.id, 25);
    assert_eq!(summary.types, vec!["electric".to_string()]);
    let state = store.state();
    assert_eq!(state.summary(25), Some(&summary));
    assert_eq!(state.phase(), ListPhase::Idle, "summary lookups do not touch the list");
    assert!(state.list().is_empty());
}

#[tokio::test]
async fn get_summary_overwrites_previous_entry() {
    let server = MockServer::start().await;
    mount_json(&server, "/pokemon/25", pokemon_json(25, "pikachu", &["electric"]), 1).await;
    mount_json(&server, "/pokemon/pikachu", pokemon_json(25, "pikachu-renamed", &["electric"]), 1).await;
    let store = store_for(&server);

    store.get_summary(25u32).await.unwrap();
    store.get_summary("pikachu").await.unwrap();

    let state = store.state();
    assert_eq!(state.summaries().len(), 1);
    assert_eq!(state.summary(25).unwrap().name, "pikachu-renamed");
}

#[tokio::test]
async fn get_summary_propagates_not_found() {
    let server = MockServer::start().await;
    mount_status(&server, "/pokemon/agumon", 404).await;
    let store = store_for(&server);

    let err = store.get_summary("agumon").await.unwrap_err();

    assert!(err.is_not_found());
    let state = store.state();
    assert!(state.summaries().is_empty());
    assert!(state.error().is_none(), "lookup errors are not recorded in state");
}

// ── get_detail ───────────────────────────────────────────────────────

#[tokio::test]
async fn get_detail_implies_summary() {
    let server = MockServer::start().await;
    mount_json(&server, "/pokemon/42", pokemon_json(42, "golbat", &["poison", "flying"]), 1).await;
    mount_json(&server, "/pokemon-species/42", species_json(42, "golbat"), 1).await;
    let store = store_for(&server);

    let detail = store.get_detail(42u32).await.unwrap();

    let state = store.state();
    let stored_detail = state.detail(42).unwrap();
    let stored_summary = state.summary(42).unwrap();
    assert_eq!(stored_detail, &detail);
    assert_eq!(stored_summary, &detail.summary);
    assert_eq!(stored_summary.types, vec!["poison", "flying"]);
    assert_eq!(detail.genus.as_deref(), Some("Seed Pokémon"));
}

#[tokio::test]
async fn get_detail_reuses_cached_item() {
    let server = MockServer::start().await;
    mount_json(&server, "/pokemon/1", pokemon_json(1, "bulbasaur", &["grass"]), 1).await;
    mount_json(&server, "/pokemon-species/1", species_json(1, "bulbasaur"), 1).await;
    let store = store_for(&server);

    store.get_summary(1u32).await.unwrap();
    store.get_detail(1u32).await.unwrap();
    store.get_detail(1u32).await.unwrap();

    assert_eq!(store.client().cached_entries().await, 2);
}

#[tokio::test]
async fn get_detail_commits_nothing_when_species_fails() {
    let server = MockServer::start().await;
    mount_json(&server, "/pokemon/808", pokemon_json(808, "meltan", &["steel"]), 1).await;
    mount_status(&server, "/pokemon-species/808", 502).await;
    let store = store_for(&server);

    let err = store.get_detail(808u32).await.unwrap_err();

    match err {
        PokedexError::Upstream { status, endpoint } => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(endpoint, "/pokemon-species/808");
        }
        other => panic!("Expected PokedexError::Upstream, got: {other:?}"),
    }
    let state = store.state();
    assert!(state.details().is_empty());
    assert!(state.summaries().is_empty());
}
