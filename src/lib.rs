//! Phone Input - a country-code selector with live phone-number validation.
//!
//! This library provides the state behind a phone-number form field: a
//! searchable country list that sets the dialing prefix, and a validator that
//! normalizes typed digits, checks them with libphonenumber metadata and
//! reformats the field once the number is valid.
//!
//! # Architecture
//!
//! - **domain**: Value objects for dial codes, region codes and digit normalization
//! - **models**: Country entries, selection state and validation results
//! - **catalog**: The static country dataset
//! - **matching**: Case-insensitive country name filtering
//! - **debounce**: Trailing-edge debouncing for the search box
//! - **selector**: Country selector state and list rendering
//! - **phone**: Phone-number library seam and the validation state machine
//! - **widget**: Controller wiring selector and validator, plus the event loop
//! - **observability**: Counters and timers
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod catalog;
pub mod config;
pub mod debounce;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod observability;
pub mod phone;
pub mod selector;
pub mod widget;

pub use catalog::CountryCatalog;
pub use config::Config;
pub use error::{CatalogError, CommandError, ConfigError, SubmitError, ValidationError};
pub use models::{CountryEntry, PhoneValidationResult, SelectionState, ValidationState};
pub use observability::MetricsTracker;
pub use phone::{LibPhoneNumber, PhoneNumberLibrary, PhoneValidator};
pub use selector::{ClickTarget, CountrySelector};
pub use widget::{run_widget, PhoneInputWidget, SubmittedPhone, WidgetEvent, WidgetView};
