//! Validation result model.

use serde::Serialize;

/// Output format requested from the phone-number library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// "+12015550123"
    E164,
    /// "+1 201-555-0123"
    International,
    /// "(201) 555-0123"
    National,
}

/// Where the phone field currently sits in its three-state lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationState {
    /// No country selected, or too few digits to attempt parsing
    #[default]
    Empty,
    /// Parse failed or the number was rejected
    Invalid,
    /// Parsed, accepted and formatted
    Valid,
}

/// Outcome of validating one (dial code, digits) pair.
///
/// Empty strings in `e164` and `national` mean "not yet validated".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PhoneValidationResult {
    /// Digits the user typed, with formatting stripped
    pub raw_digits: String,

    /// Canonical international form, e.g. "+12015550123"
    pub e164: String,

    /// Display form within the number's own country, e.g. "(201) 555-0123"
    pub national: String,

    pub is_valid: bool,

    pub state: ValidationState,
}

impl PhoneValidationResult {
    /// Result for input too short to parse (or no country selected).
    pub fn empty(raw_digits: impl Into<String>) -> Self {
        Self {
            raw_digits: raw_digits.into(),
            ..Default::default()
        }
    }

    /// Whether the number is ready to be submitted.
    pub fn is_submittable(&self) -> bool {
        self.is_valid && !self.e164.is_empty()
    }
}
