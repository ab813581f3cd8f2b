//! Seam to the phone-number parsing library.

use crate::error::{ValidationError, ValidationResult};
use crate::models::NumberFormat;
use phonenumber::{Mode, PhoneNumber};

/// The operations the widget needs from a phone-number library.
///
/// Enables different implementations (libphonenumber metadata, test doubles).
pub trait PhoneNumberLibrary: Send + Sync {
    /// Parsed representation handed back to `is_valid` and `format`.
    type Parsed;

    /// Parse a full number string such as "+12015550123".
    fn parse(&self, full_number: &str) -> ValidationResult<Self::Parsed>;

    /// Whether the parsed number is valid for its region.
    fn is_valid(&self, number: &Self::Parsed) -> bool;

    /// Render the parsed number in the requested format.
    fn format(&self, number: &Self::Parsed, format: NumberFormat) -> String;
}

/// [`PhoneNumberLibrary`] backed by the `phonenumber` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibPhoneNumber;

impl LibPhoneNumber {
    pub fn new() -> Self {
        Self
    }
}

impl PhoneNumberLibrary for LibPhoneNumber {
    type Parsed = PhoneNumber;

    fn parse(&self, full_number: &str) -> ValidationResult<PhoneNumber> {
        let input = full_number.to_string();

        // The phonenumber crate can panic on some malformed inputs
        let result = std::panic::catch_unwind(move || phonenumber::parse(None, input));

        match result {
            Ok(Ok(number)) => Ok(number),
            Ok(Err(err)) => Err(ValidationError::ParseFailure {
                input: full_number.to_string(),
                reason: err.to_string(),
            }),
            Err(_) => {
                tracing::error!(input = %full_number, "phonenumber crate panicked while parsing");
                Err(ValidationError::ParseFailure {
                    input: full_number.to_string(),
                    reason: "parser panicked".to_string(),
                })
            }
        }
    }

    fn is_valid(&self, number: &PhoneNumber) -> bool {
        phonenumber::is_valid(number)
    }

    fn format(&self, number: &PhoneNumber, format: NumberFormat) -> String {
        let mode = match format {
            NumberFormat::E164 => Mode::E164,
            NumberFormat::International => Mode::International,
            NumberFormat::National => Mode::National,
        };
        number.format().mode(mode).to_string()
    }
}
