//! Shared fixtures for integration tests.

#![allow(dead_code)]

use phone_input::{Config, CountryCatalog, PhoneInputWidget, PhoneNumberLibrary};
use std::sync::Arc;

/// A small catalog with a few overlapping names.
pub fn sample_catalog() -> Arc<CountryCatalog> {
    let json = r#"[
        {"name": "Germany", "dial_code": "+49", "code": "DE"},
        {"name": "United Kingdom", "dial_code": "+44", "code": "GB"},
        {"name": "United States", "dial_code": "+1", "code": "US"},
        {"name": "Finland", "dial_code": "+358", "code": "FI"},
        {"name": "Ireland", "dial_code": "+353", "code": "IE"}
    ]"#;
    Arc::new(CountryCatalog::from_json_str(json).expect("sample catalog is valid"))
}

/// The full embedded catalog.
pub fn embedded_catalog() -> Arc<CountryCatalog> {
    CountryCatalog::embedded().expect("embedded catalog is valid")
}

/// Widget over the sample catalog with the given library and default config.
pub fn sample_widget<L: PhoneNumberLibrary>(library: L) -> PhoneInputWidget<L> {
    PhoneInputWidget::with_library(sample_catalog(), library, &Config::default())
}

/// Names of the given entries, in order.
pub fn names(entries: &[phone_input::CountryEntry]) -> Vec<String> {
    entries.iter().map(|e| e.name.clone()).collect()
}
