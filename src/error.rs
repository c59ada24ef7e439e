//! Error types for pokedex_data

use reqwest::StatusCode;
use thiserror::Error;

/// Unified error type for catalog access
#[derive(Debug, Error)]
pub enum PokedexError {
    /// HTTP request failed (connection error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// PokeAPI answered with a non-success status
    #[error("PokeAPI returned {status} for {endpoint}")]
    Upstream { status: StatusCode, endpoint: String },
    /// PokeAPI has no record at this endpoint (HTTP 404)
    #[error("Not found on PokeAPI: {0}")]
    NotFound(String),
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PokedexError {
    /// HTTP status reported by PokeAPI, if the failure came from a response
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            PokedexError::Upstream { status, .. } => Some(*status),
            PokedexError::NotFound(_) => Some(StatusCode::NOT_FOUND),
            PokedexError::Network(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PokedexError::NotFound(_))
    }
}

/// Result alias for pokedex_data operations
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
