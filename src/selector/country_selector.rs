//! Country selector state.

use crate::catalog::CountryCatalog;
use crate::error::CatalogResult;
use crate::matching::filter_countries;
use crate::models::{CountryEntry, SelectionState};
use std::sync::Arc;

/// Callback invoked after every selection, including repeated ones.
pub type SelectListener = Box<dyn FnMut(&SelectionState) + Send>;

/// Where a click landed relative to the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The control that opens and closes the list
    Toggle,
    /// Anywhere inside the list container (search box, list items)
    List,
    /// Anywhere else on the page
    Outside,
}

/// Filterable country list with an open/closed dropdown and a selection.
pub struct CountrySelector {
    catalog: Arc<CountryCatalog>,
    visible: Vec<CountryEntry>,
    selection: SelectionState,
    open: bool,
    listeners: Vec<SelectListener>,
}

impl CountrySelector {
    /// Create a closed selector showing the whole catalog, nothing selected.
    pub fn new(catalog: Arc<CountryCatalog>) -> Self {
        let visible = catalog.entries().to_vec();
        Self {
            catalog,
            visible,
            selection: SelectionState::default(),
            open: false,
            listeners: Vec::new(),
        }
    }

    /// Entries whose name contains `query`, case-insensitively.
    ///
    /// Does not change what the selector displays; see [`Self::apply_search`].
    pub fn search(&self, query: &str) -> Vec<CountryEntry> {
        filter_countries(query, self.catalog.entries())
    }

    /// Replace the visible list with the results for `query`.
    ///
    /// Returns the number of visible entries.
    pub fn apply_search(&mut self, query: &str) -> usize {
        self.visible = self.search(query);
        tracing::debug!(query = %query, results = self.visible.len(), "Country list filtered");
        self.visible.len()
    }

    /// Register a callback fired after each selection.
    pub fn on_select<F>(&mut self, listener: F)
    where
        F: FnMut(&SelectionState) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Select an entry: record it, close the list and notify listeners.
    ///
    /// Selecting the already-selected entry is not short-circuited.
    pub fn select(&mut self, entry: &CountryEntry) -> SelectionState {
        self.selection = SelectionState::from_entry(entry);
        self.open = false;

        tracing::debug!(
            region = %entry.region_code,
            dial_code = %entry.dial_code,
            "Country selected"
        );

        for listener in self.listeners.iter_mut() {
            listener(&self.selection);
        }

        self.selection.clone()
    }

    /// Select the catalog entry for a region code.
    pub fn select_region(&mut self, region_code: &str) -> CatalogResult<SelectionState> {
        let entry = self.catalog.find_by_region(region_code)?.clone();
        Ok(self.select(&entry))
    }

    /// Handle a click anywhere on the page.
    pub fn click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Toggle => {
                self.toggle();
            }
            ClickTarget::List => {}
            ClickTarget::Outside => self.close(),
        }
    }

    /// Flip the list between shown and hidden. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Entries currently displayed.
    pub fn visible(&self) -> &[CountryEntry] {
        &self.visible
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The entry matching the current selection, if any.
    pub fn selected_entry(&self) -> Option<&CountryEntry> {
        let region = self.selection.selected_region_code.as_ref()?;
        self.catalog
            .entries()
            .iter()
            .find(|entry| &entry.region_code == region)
    }

    pub fn catalog(&self) -> &Arc<CountryCatalog> {
        &self.catalog
    }
}

impl std::fmt::Debug for CountrySelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountrySelector")
            .field("visible", &self.visible.len())
            .field("selection", &self.selection)
            .field("open", &self.open)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
