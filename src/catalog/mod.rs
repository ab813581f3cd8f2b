//! Country dataset loading and lookup.
//!
//! The dataset is a read-only table loaded once at startup, either from the
//! JSON embedded in the binary or from a file named in the configuration.

pub mod country_catalog;

pub use country_catalog::CountryCatalog;
