//! Country dataset records and selection state.

use crate::domain::{DialCode, RegionCode};
use serde::{Deserialize, Serialize};

/// One row of the static country table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CountryEntry {
    /// Display name, e.g. "United States"
    pub name: String,

    /// Calling-code prefix, e.g. "+1"
    pub dial_code: DialCode,

    /// ISO 3166-1 alpha-2 code (dataset field `code`)
    #[serde(rename = "code")]
    pub region_code: RegionCode,
}

impl CountryEntry {
    /// Create a new entry from already validated parts.
    pub fn new(name: impl Into<String>, dial_code: DialCode, region_code: RegionCode) -> Self {
        Self {
            name: name.into(),
            dial_code,
            region_code,
        }
    }

    /// True when the lower-cased name contains `needle`.
    ///
    /// `needle` must already be lower-cased.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

/// The country currently chosen in the selector.
///
/// Both fields are unset until the user makes an explicit selection.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SelectionState {
    pub selected_dial_code: Option<DialCode>,
    pub selected_region_code: Option<RegionCode>,
}

impl SelectionState {
    /// Selection state for a chosen entry.
    pub fn from_entry(entry: &CountryEntry) -> Self {
        Self {
            selected_dial_code: Some(entry.dial_code.clone()),
            selected_region_code: Some(entry.region_code.clone()),
        }
    }

    /// The selected dial code, or an empty string when nothing is selected.
    pub fn dial_code_str(&self) -> &str {
        self.selected_dial_code
            .as_ref()
            .map(DialCode::as_str)
            .unwrap_or("")
    }

    /// The selected region code, or an empty string when nothing is selected.
    pub fn region_code_str(&self) -> &str {
        self.selected_region_code
            .as_ref()
            .map(RegionCode::as_str)
            .unwrap_or("")
    }

    /// Whether a country has been chosen.
    pub fn is_selected(&self) -> bool {
        self.selected_dial_code.is_some()
    }
}
