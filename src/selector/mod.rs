//! Searchable country selector.
//!
//! Selection and filtering are independent of rendering: the selector keeps
//! the visible list, the open flag and the current selection, and
//! [`render_countries`] turns any list into display items.

pub mod country_selector;
pub mod render;

pub use country_selector::{ClickTarget, CountrySelector, SelectListener};
pub use render::{render_countries, CountryListItem, FlagUrlBuilder};
