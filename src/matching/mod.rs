//! Country name matching for the selector's search box.
//!
//! Matching is a plain case-insensitive substring test against the country
//! name; results keep dataset order.

pub mod country_filter;

pub use country_filter::{filter_countries, normalize_query};
