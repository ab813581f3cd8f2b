//! Immutable country table shared by the selector.

use crate::domain::RegionCode;
use crate::error::{CatalogError, CatalogResult};
use crate::models::CountryEntry;
use once_cell::sync::OnceCell;
use std::path::Path;
use std::sync::Arc;

/// Country table embedded at compile time.
static EMBEDDED_JSON: &str = include_str!("../../data/country_codes.json");

static EMBEDDED: OnceCell<Arc<CountryCatalog>> = OnceCell::new();

/// The full, ordered list of countries the selector offers.
///
/// Entries keep dataset order; that order is what an empty search returns.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryCatalog {
    entries: Vec<CountryEntry>,
}

impl CountryCatalog {
    /// Build a catalog from entries, rejecting an empty table.
    pub fn new(entries: Vec<CountryEntry>) -> CatalogResult<Self> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { entries })
    }

    /// The embedded table, parsed on first use and shared afterwards.
    pub fn embedded() -> CatalogResult<Arc<CountryCatalog>> {
        EMBEDDED
            .get_or_try_init(|| Self::from_json_str(EMBEDDED_JSON).map(Arc::new))
            .cloned()
    }

    /// Parse a JSON array of `{ "name", "dial_code", "code" }` records.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let entries: Vec<CountryEntry> = serde_json::from_str(json)?;
        tracing::debug!(count = entries.len(), "Parsed country dataset");
        Self::new(entries)
    }

    /// Load a dataset file.
    pub fn from_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load `path` when given, otherwise the embedded table.
    pub fn load(path: Option<&Path>) -> CatalogResult<Arc<CountryCatalog>> {
        match path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading country dataset from file");
                Self::from_file(path).map(Arc::new)
            }
            None => Self::embedded(),
        }
    }

    /// All entries in dataset order.
    pub fn entries(&self) -> &[CountryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the first entry for a region code (case-insensitive).
    pub fn find_by_region(&self, region_code: &str) -> CatalogResult<&CountryEntry> {
        let region = RegionCode::new(region_code)
            .map_err(|_| CatalogError::UnknownRegion(region_code.to_string()))?;

        self.entries
            .iter()
            .find(|entry| entry.region_code == region)
            .ok_or_else(|| CatalogError::UnknownRegion(region_code.to_string()))
    }
}
