//! Async PokeAPI client with a time-boxed response cache
//!
//! Every request goes through [`CatalogClient::fetch`], which keys the cache by
//! endpoint and canonical query parameters. Raw JSON is cached; mapping into
//! view models happens above this layer.

use crate::api::models::{Pokemon, PokemonPage, PokemonRef, PokemonSpecies};
use crate::cache::ResponseCache;
use crate::config::ClientConfig;
use crate::error::{PokedexError, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// PokeAPI client owning the session's response cache
///
/// Clones share one cache table.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    default_ttl: Duration,
    cache: Arc<RwLock<ResponseCache>>,
}

impl CatalogClient {
    /// Build a client from configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        log::info!("Creating PokeAPI client for {}", config.base_url);

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
            default_ttl: config.cache_ttl,
            cache: Arc::new(RwLock::new(ResponseCache::default())),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Number of cached responses, stale ones included
    pub async fn cached_entries(&self) -> usize {
        self.cache.read().await.len()
    }

    /// Fetch raw JSON for `endpoint`, reusing a cached copy younger than the default TTL
    pub async fn fetch(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Arc<Value>> {
        self.fetch_with_ttl(endpoint, params, self.default_ttl).await
    }

    /// Fetch raw JSON for `endpoint`, reusing a cached copy younger than `ttl`
    pub async fn fetch_with_ttl(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
        ttl: Duration,
    ) -> Result<Arc<Value>> {
        let key = ResponseCache::key(endpoint, params);

        let cached = self.cache.read().await.get(&key, Instant::now(), ttl);
        if let Some(payload) = cached {
            log::debug!("Cache hit for {}", key);
            return Ok(payload);
        }

        log::debug!("Cache miss for {}, fetching from PokeAPI", key);
        let payload = Arc::new(self.request(endpoint, params).await?);

        self.cache
            .write()
            .await
            .insert(key, Instant::now(), Arc::clone(&payload));

        Ok(payload)
    }

    /// Fetch one page of the Pokemon index
    pub async fn list_pokemon(&self, limit: u32, offset: u32) -> Result<PokemonPage> {
        let params = [("limit", limit.to_string()), ("offset", offset.to_string())];
        let payload = self.fetch("/pokemon", &params).await?;
        decode(&payload)
    }

    /// Fetch the full record for one Pokemon
    pub async fn pokemon(&self, lookup: &PokemonRef) -> Result<Pokemon> {
        let payload = self.fetch(&format!("/pokemon/{}", lookup), &[]).await?;
        decode(&payload)
    }

    /// Fetch the species record for one Pokemon
    pub async fn species(&self, lookup: &PokemonRef) -> Result<PokemonSpecies> {
        let payload = self
            .fetch(&format!("/pokemon-species/{}", lookup), &[])
            .await?;
        decode(&payload)
    }

    async fn request(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        log::info!("Fetching from PokeAPI: {}", url);

        let response = self.client.get(&url).query(params).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(PokedexError::NotFound(endpoint.to_string()));
        }
        if !status.is_success() {
            log::debug!("PokeAPI returned {} for {}", status, url);
            return Err(PokedexError::Upstream {
                status,
                endpoint: endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        log::debug!("Response for {}: {} bytes", url, body.len());
        Ok(serde_json::from_str(&body)?)
    }
}

fn decode<T: DeserializeOwned>(payload: &Value) -> Result<T> {
    Ok(T::deserialize(payload)?)
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
