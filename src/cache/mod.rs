//! Caching layer for PokeAPI responses

pub mod response_cache;

pub use response_cache::{CacheEntry, ResponseCache};
