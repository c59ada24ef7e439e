use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A raw JSON response and the moment it was stored
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub fetched_at: Instant,
    pub payload: Arc<Value>,
}

impl CacheEntry {
    /// Fresh while strictly less than `ttl` has elapsed since `fetched_at`
    pub fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.fetched_at) < ttl
    }
}

/// In-memory cache of raw PokeAPI responses keyed by request identity
///
/// Entries never get evicted. A stale entry reads as absent and is replaced by
/// the next insert for the same key.
#[derive(Debug, Default)]
pub struct ResponseCache {
    /// Map of canonical request key to response
    entries: HashMap<String, CacheEntry>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical key for an endpoint and its query parameters
    ///
    /// Parameters are sorted by name then value and percent-encoded, so the
    /// same set of pairs yields the same key in any order.
    pub fn key(endpoint: &str, params: &[(&str, String)]) -> String {
        if params.is_empty() {
            return endpoint.to_string();
        }

        let mut pairs: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        pairs.sort_unstable();

        let query = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", endpoint, query)
    }

    /// Get a response if it is still fresh at `now`
    pub fn get(&self, key: &str, now: Instant, ttl: Duration) -> Option<Arc<Value>> {
        self.entries
            .get(key)
            .filter(|entry| entry.is_fresh(now, ttl))
            .map(|entry| Arc::clone(&entry.payload))
    }

    /// Store a response, replacing any previous entry for the key
    pub fn insert(&mut self, key: String, fetched_at: Instant, payload: Arc<Value>) {
        self.entries.insert(
            key,
            CacheEntry {
                fetched_at,
                payload,
            },
        );
    }

    /// Number of stored entries, stale ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "response_cache_tests.rs"]
mod tests;
