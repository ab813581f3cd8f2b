//! Data models for the phone input widget.
//!
//! This module contains the country dataset records, the selector's selection
//! state, and the result of validating a phone number.

pub mod country;
pub mod validation;

pub use country::{CountryEntry, SelectionState};
pub use validation::{NumberFormat, PhoneValidationResult, ValidationState};
