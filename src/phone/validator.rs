//! Phone validation state machine.
//!
//! Three states, driven only by input-changed and country-changed events:
//!
//! - **Empty**: no country selected, or at most one digit typed
//! - **Invalid**: the library failed to parse or rejected the number
//! - **Valid**: parsed, accepted, and formatted
//!
//! The last successfully computed E.164/national pair survives Invalid
//! results; only an explicit [`PhoneValidator::clear_formatted`] (issued on
//! every country selection) resets it.

use super::library::{LibPhoneNumber, PhoneNumberLibrary};
use crate::domain::{normalize, PhoneDigits};
use crate::error::ValidationError;
use crate::models::{NumberFormat, PhoneValidationResult, ValidationState};

/// Validator holding the cross-event phone state for one widget.
pub struct PhoneValidator<L: PhoneNumberLibrary = LibPhoneNumber> {
    library: L,
    e164: String,
    national: String,
    invalid_marker: bool,
    last_result: PhoneValidationResult,
    last_error: Option<ValidationError>,
}

impl PhoneValidator<LibPhoneNumber> {
    /// Create a validator backed by the `phonenumber` crate.
    pub fn new() -> Self {
        Self::with_library(LibPhoneNumber::new())
    }
}

impl Default for PhoneValidator<LibPhoneNumber> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: PhoneNumberLibrary> PhoneValidator<L> {
    /// Create a validator over any [`PhoneNumberLibrary`].
    pub fn with_library(library: L) -> Self {
        Self {
            library,
            e164: String::new(),
            national: String::new(),
            invalid_marker: false,
            last_result: PhoneValidationResult::default(),
            last_error: None,
        }
    }

    /// Strip every non-digit character from raw input.
    pub fn normalize(raw_input: &str) -> String {
        normalize(raw_input)
    }

    /// Validate `digits_only` under `dial_code` and record the outcome.
    ///
    /// # Arguments
    /// * `dial_code` - Selected calling code such as "+1"; empty when no country is selected
    /// * `digits_only` - Normalized digits from the input field
    ///
    /// # Returns
    /// The recomputed result. On Invalid the formatted fields carry whatever
    /// the last Valid result produced (possibly empty).
    pub fn validate(&mut self, dial_code: &str, digits_only: &str) -> PhoneValidationResult {
        self.last_error = None;

        if dial_code.is_empty() {
            tracing::debug!("No country selected, skipping validation");
            return self.record(PhoneValidationResult::empty(digits_only));
        }

        if digits_only.len() <= 1 {
            tracing::trace!(digits = digits_only.len(), "Input too short to parse");
            return self.record(PhoneValidationResult::empty(digits_only));
        }

        let full_number = format!("{}{}", dial_code, digits_only);

        let parsed = match self.library.parse(&full_number) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(error = %err, "Error parsing number");
                return self.reject(digits_only, err);
            }
        };

        if !self.library.is_valid(&parsed) {
            tracing::debug!(number = %full_number, "Number parsed but not valid");
            return self.reject(digits_only, ValidationError::InvalidNumber(full_number));
        }

        self.e164 = self.library.format(&parsed, NumberFormat::E164);
        self.national = self.library.format(&parsed, NumberFormat::National);
        self.invalid_marker = false;

        tracing::debug!(
            e164 = %self.e164,
            national = %self.national,
            "Phone number valid"
        );

        self.record(PhoneValidationResult {
            raw_digits: digits_only.to_string(),
            e164: self.e164.clone(),
            national: self.national.clone(),
            is_valid: true,
            state: ValidationState::Valid,
        })
    }

    /// Normalize `raw_input` and validate it.
    pub fn validate_input(&mut self, dial_code: &str, raw_input: &str) -> PhoneValidationResult {
        let digits = PhoneDigits::from_raw(raw_input);
        self.validate(dial_code, digits.as_str())
    }

    /// Forget the last formatted pair.
    pub fn clear_formatted(&mut self) {
        self.e164.clear();
        self.national.clear();
    }

    /// Whether the field should currently show the invalid styling.
    pub fn invalid_marker(&self) -> bool {
        self.invalid_marker
    }

    /// Most recent validation result.
    pub fn last_result(&self) -> &PhoneValidationResult {
        &self.last_result
    }

    /// Why the most recent validation failed, if it reached the library and failed.
    pub fn last_error(&self) -> Option<&ValidationError> {
        self.last_error.as_ref()
    }

    /// Last computed E.164 string (empty if none).
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// Last computed national string (empty if none).
    pub fn national(&self) -> &str {
        &self.national
    }

    /// The library this validator delegates to.
    pub fn library(&self) -> &L {
        &self.library
    }

    fn reject(&mut self, digits_only: &str, err: ValidationError) -> PhoneValidationResult {
        self.invalid_marker = true;
        self.last_error = Some(err);

        self.record(PhoneValidationResult {
            raw_digits: digits_only.to_string(),
            e164: self.e164.clone(),
            national: self.national.clone(),
            is_valid: false,
            state: ValidationState::Invalid,
        })
    }

    fn record(&mut self, result: PhoneValidationResult) -> PhoneValidationResult {
        self.last_result = result.clone();
        result
    }
}
