//! Digit normalization for raw phone input.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").expect("static regex"));

/// Strip every non-digit character from raw input.
///
/// ```
/// use phone_input::domain::normalize;
///
/// assert_eq!(normalize("(201) 555-0123"), "2015550123");
/// ```
pub fn normalize(raw_input: &str) -> String {
    NON_DIGITS.replace_all(raw_input, "").into_owned()
}

/// The digits-only form of whatever the user typed into the phone field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PhoneDigits(String);

impl PhoneDigits {
    /// Normalize raw input into digits.
    pub fn from_raw(raw_input: &str) -> Self {
        Self(normalize(raw_input))
    }

    /// Get the digits as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
