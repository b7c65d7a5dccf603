//! Dashboard view state.
//!
//! The live view is rendered from an immutable snapshot of everything it
//! needs. State transitions return a new value; a refresh swaps the whole
//! asset collection in one step so a render never sees a half-updated mix.

use crate::core::market::{AssetSnapshot, SortMode};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    assets: Vec<AssetSnapshot>,
    selected_id: Option<String>,
    paused: bool,
    sort: SortMode,
    refreshed_at: Option<DateTime<Utc>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assets(&self) -> &[AssetSnapshot] {
        &self.assets
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn sort(&self) -> SortMode {
        self.sort
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }

    /// The asset currently shown in the chart panel, resolved against the
    /// present collection.
    pub fn selected(&self) -> Option<&AssetSnapshot> {
        match &self.selected_id {
            Some(id) => self.assets.iter().find(|a| &a.id == id),
            None => self.assets.first(),
        }
    }

    /// Replaces the asset collection with a fresh one. The selection is
    /// carried over when the asset still exists, otherwise it falls back
    /// to the first asset of the new collection.
    pub fn with_refresh(mut self, assets: Vec<AssetSnapshot>, at: DateTime<Utc>) -> Self {
        let keep_selection = match &self.selected_id {
            Some(id) => assets.iter().any(|a| &a.id == id),
            None => false,
        };
        if !keep_selection {
            self.selected_id = assets.first().map(|a| a.id.clone());
        }
        self.assets = assets;
        self.refreshed_at = Some(at);
        self
    }

    /// Selects an asset by id; ignored when the id is unknown.
    pub fn with_selection(mut self, id: &str) -> Self {
        if self.assets.iter().any(|a| a.id == id) {
            self.selected_id = Some(id.to_string());
        }
        self
    }

    pub fn with_paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }
}
