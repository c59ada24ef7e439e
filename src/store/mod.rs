//! Session-scoped catalog store
//!
//! The single read/command surface for the view layer. It loads the Pokemon
//! list once per session, fetches summaries and details on demand, and indexes
//! both by id. The view layer only ever sees immutable [`StoreState`]
//! snapshots.

mod state;

use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use futures::future::try_join_all;

use crate::api::{CatalogClient, PokemonRef};
use crate::config::ClientConfig;
use crate::error::{PokedexError, Result};
use crate::mapper;
use crate::models::{Detail, Summary};

pub use state::{ListParams, ListPhase, StoreState};

type SharedState = RwLock<Arc<StoreState>>;

/// Catalog store for one browsing session
///
/// The state lock is only taken to swap snapshots and is never held across
/// a network call.
pub struct CatalogStore {
    client: CatalogClient,
    state: SharedState,
}

impl CatalogStore {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            state: RwLock::new(Arc::new(StoreState::default())),
        }
    }

    /// Build a store with its own client
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Ok(Self::new(CatalogClient::new(config)?))
    }

    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    /// Current snapshot
    pub fn state(&self) -> Arc<StoreState> {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Load the Pokemon list and a summary for each entry
    ///
    /// Does nothing if a list is already loaded or a load is in flight. Failures
    /// are recorded in [`StoreState::error`] and leave the list untouched; the
    /// list, total count and summaries are committed together only when every
    /// request succeeded.
    pub async fn load_list(&self, limit: u32, offset: u32) -> Arc<StoreState> {
        {
            let mut guard = write_lock(&self.state);
            if !guard.list.is_empty() || guard.loading {
                log::debug!("Pokemon list already loaded or loading, skipping fetch");
                return Arc::clone(&guard);
            }
            let state = Arc::make_mut(&mut guard);
            state.loading = true;
            state.phase = ListPhase::Loading;
            state.error = None;
            state.list_params = Some(ListParams { limit, offset });
        }
        let _reset = LoadingReset {
            state: &self.state,
        };

        log::info!("Loading Pokemon list (limit {}, offset {})", limit, offset);
        let result = self.fetch_list(limit, offset).await;

        let mut guard = write_lock(&self.state);
        let state = Arc::make_mut(&mut guard);
        state.loading = false;

        match result {
            Ok((total_count, summaries)) => {
                log::info!("Loaded {} of {} Pokemon", summaries.len(), total_count);
                for summary in &summaries {
                    state.merge_summary(summary.clone());
                }
                state.list = summaries;
                state.total_count = total_count;
                state.phase = ListPhase::Ready;
            }
            Err(e) => {
                log::warn!("Failed to load Pokemon list: {}", e);
                state.error = Some(e.to_string());
                state.phase = ListPhase::Failed;
            }
        }

        Arc::clone(&guard)
    }

    /// Fetch one Pokemon and index its summary
    pub async fn get_summary(&self, lookup: impl Into<PokemonRef>) -> Result<Summary> {
        let lookup = lookup.into();
        let pokemon = self.client.pokemon(&lookup).await?;
        let summary = mapper::to_summary(&pokemon);

        self.update(|state| state.merge_summary(summary.clone()));
        log::debug!("Stored summary for #{} {}", summary.id, summary.name);
        Ok(summary)
    }

    /// Fetch one Pokemon with its species and index both detail and summary
    pub async fn get_detail(&self, lookup: impl Into<PokemonRef>) -> Result<Detail> {
        let lookup = lookup.into();
        let (pokemon, species) =
            tokio::try_join!(self.client.pokemon(&lookup), self.client.species(&lookup))?;
        let detail = mapper::to_detail(&pokemon, &species);

        self.update(|state| state.merge_detail(detail.clone()));
        log::debug!("Stored detail for #{} {}", detail.id(), detail.summary.name);
        Ok(detail)
    }

    async fn fetch_list(&self, limit: u32, offset: u32) -> Result<(u64, Vec<Summary>)> {
        let page = self.client.list_pokemon(limit, offset).await?;
        log::debug!(
            "Index returned {} names, fetching summaries",
            page.results.len()
        );

        let summaries = try_join_all(page.results.iter().map(|entry| {
            let lookup = PokemonRef::from(entry.name.as_str());
            async move {
                let pokemon = self.client.pokemon(&lookup).await?;
                Ok::<_, PokedexError>(mapper::to_summary(&pokemon))
            }
        }))
        .await?;

        Ok((page.count, summaries))
    }

    /// Apply one mutation as a single snapshot replacement
    fn update<R>(&self, f: impl FnOnce(&mut StoreState) -> R) -> R {
        let mut guard = write_lock(&self.state);
        f(Arc::make_mut(&mut guard))
    }
}

/// Poisoning is ignored: writers only assign whole fields of the snapshot.
fn write_lock(state: &SharedState) -> RwLockWriteGuard<'_, Arc<StoreState>> {
    state.write().unwrap_or_else(PoisonError::into_inner)
}

/// Clears the loading flag when a list load is dropped before it commits
struct LoadingReset<'a> {
    state: &'a SharedState,
}

impl Drop for LoadingReset<'_> {
    fn drop(&mut self) {
        let mut guard = write_lock(self.state);
        if guard.loading {
            log::debug!("List load abandoned, clearing loading flag");
            let state = Arc::make_mut(&mut guard);
            state.loading = false;
            state.phase = ListPhase::Idle;
        }
    }
}

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
