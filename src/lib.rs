//! Pokedex Data - cached PokeAPI access for the Pokedex browser
//!
//! Fetches creature records from PokeAPI through a time-boxed response cache,
//! maps them into list and detail view models, and keeps a per-session store
//! that the presentation layer reads snapshots from.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod mapper;
pub mod models;
pub mod store;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use api::{CatalogClient, Pokemon, PokemonPage, PokemonRef, PokemonSpecies};
pub use cache::{CacheEntry, ResponseCache};
pub use config::ClientConfig;
pub use error::{PokedexError, Result};
pub use mapper::{to_detail, to_summary};
pub use models::{Ability, Detail, Stat, Summary};
pub use store::{CatalogStore, ListParams, ListPhase, StoreState};
