//! Country list rendering and flag image URLs.

use crate::config::{Config, FlagStyle};
use crate::domain::RegionCode;
use crate::models::CountryEntry;
use serde::Serialize;

/// Builds flag image URLs of the form `{base}/{REGION}/{style}/{size}.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagUrlBuilder {
    base_url: String,
    style: FlagStyle,
    size: u16,
}

impl FlagUrlBuilder {
    pub fn new(base_url: impl Into<String>, style: FlagStyle, size: u16) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            style,
            size,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.flag_base_url, config.flag_style, config.flag_size)
    }

    /// Flag image URL for a region.
    pub fn url(&self, region: &RegionCode) -> String {
        format!(
            "{}/{}/{}/{}.png",
            self.base_url,
            urlencoding::encode(region.as_str()),
            self.style.as_str(),
            self.size
        )
    }
}

impl Default for FlagUrlBuilder {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// One row of the rendered country list.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CountryListItem {
    pub name: String,
    pub dial_code: String,
    pub region_code: String,
    pub flag_url: String,
}

/// Render a list of entries.
///
/// Used for the initial list and for every re-render after a search.
pub fn render_countries(entries: &[CountryEntry], flags: &FlagUrlBuilder) -> Vec<CountryListItem> {
    entries
        .iter()
        .map(|entry| CountryListItem {
            name: entry.name.clone(),
            dial_code: entry.dial_code.to_string(),
            region_code: entry.region_code.to_string(),
            flag_url: flags.url(&entry.region_code),
        })
        .collect()
}
