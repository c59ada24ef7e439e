//! Read-only snapshot of the catalog store

use crate::models::{Detail, Summary};
use std::collections::HashMap;

/// Parameters of the last list load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    pub limit: u32,
    pub offset: u32,
}

/// Progress of the session's list load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Everything the view layer may read
///
/// Snapshots are shared behind an `Arc`; the store replaces rather than
/// mutates a snapshot a reader may still hold.
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    pub(crate) list: Vec<Summary>,
    pub(crate) total_count: u64,
    pub(crate) loading: bool,
    pub(crate) phase: ListPhase,
    pub(crate) error: Option<String>,
    pub(crate) list_params: Option<ListParams>,
    pub(crate) summaries_by_id: HashMap<u32, Summary>,
    pub(crate) details_by_id: HashMap<u32, Detail>,
}

impl StoreState {
    /// Loaded list in index order
    pub fn list(&self) -> &[Summary] {
        &self.list
    }

    /// Total number of Pokemon PokeAPI reported for the index
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> ListPhase {
        self.phase
    }

    /// Message of the last failed list load
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn list_params(&self) -> Option<ListParams> {
        self.list_params
    }

    pub fn summary(&self, id: u32) -> Option<&Summary> {
        self.summaries_by_id.get(&id)
    }

    pub fn detail(&self, id: u32) -> Option<&Detail> {
        self.details_by_id.get(&id)
    }

    pub fn summaries(&self) -> &HashMap<u32, Summary> {
        &self.summaries_by_id
    }

    pub fn details(&self) -> &HashMap<u32, Detail> {
        &self.details_by_id
    }

    /// Filter the loaded list by name or id, and optionally by type
    ///
    /// A blank query matches everything. A numeric query matches that id
    /// exactly; anything else is a case-insensitive name substring.
    pub fn search(&self, query: &str, type_filter: Option<&str>) -> Vec<&Summary> {
        let query = query.trim().to_lowercase();
        let id_query = query.parse::<u32>().ok();

        self.list
            .iter()
            .filter(|summary| match id_query {
                Some(id) => summary.id == id,
                None => query.is_empty() || summary.name.to_lowercase().contains(&query),
            })
            .filter(|summary| type_filter.map_or(true, |t| summary.has_type(t.trim())))
            .collect()
    }

    pub(crate) fn merge_summary(&mut self, summary: Summary) {
        self.summaries_by_id.insert(summary.id, summary);
    }

    pub(crate) fn merge_detail(&mut self, detail: Detail) {
        self.merge_summary(detail.summary.clone());
        self.details_by_id.insert(detail.id(), detail);
    }
}
