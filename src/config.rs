//! Client configuration with environment overrides

use crate::error::{PokedexError, Result};
use std::time::Duration;

/// Public PokeAPI v2 endpoint
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Responses are reused for five minutes unless a call overrides it
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub const ENV_BASE_URL: &str = "POKEDEX_API_URL";
pub const ENV_CACHE_TTL_SECS: &str = "POKEDEX_CACHE_TTL_SECS";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "POKEDEX_REQUEST_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "POKEDEX_USER_AGENT";

/// Settings for [`crate::CatalogClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without trailing slash, e.g. `https://pokeapi.co/api/v2`
    pub base_url: String,
    /// Default time-to-live for cached responses
    pub cache_ttl: Duration,
    /// Per-request timeout applied by the HTTP client
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: format!("pokedex_data/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Defaults overlaid with the `POKEDEX_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overlaid with values from `lookup`, keyed by variable name
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL) {
            config = config.with_base_url(url);
        }
        if let Some(secs) = lookup(ENV_CACHE_TTL_SECS) {
            config.cache_ttl = parse_secs(ENV_CACHE_TTL_SECS, &secs)?;
        }
        if let Some(secs) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            config.request_timeout = parse_secs(ENV_REQUEST_TIMEOUT_SECS, &secs)?;
        }
        if let Some(agent) = lookup(ENV_USER_AGENT) {
            config.user_agent = agent;
        }

        config.validate()?;
        log::debug!("Loaded client config: {:?}", config);
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(PokedexError::Config("base URL must not be empty".to_string()));
        }
        if self.request_timeout.is_zero() {
            return Err(PokedexError::Config(
                "request timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_secs(name: &str, value: &str) -> Result<Duration> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| PokedexError::Config(format!("{} must be whole seconds: {}", name, e)))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
