//! DialCode value object.

use super::errors::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An international calling-code prefix such as `+1` or `+44`.
///
/// # Example
///
/// ```
/// use phone_input::domain::DialCode;
///
/// let code = DialCode::new("+44").unwrap();
/// assert_eq!(code.as_str(), "+44");
///
/// // Datasets often write shared prefixes with a space
/// let code = DialCode::new("+1 684").unwrap();
/// assert_eq!(code.as_str(), "+1684");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DialCode(String);

impl DialCode {
    /// Create a new DialCode, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - ASCII whitespace anywhere is removed
    /// - Must start with '+'
    /// - Must be followed by 1 to 4 ASCII digits
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDialCode` if the format is invalid.
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        let compact: String = code
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();

        if !Self::is_valid(&compact) {
            return Err(DomainError::InvalidDialCode(code));
        }

        Ok(Self(compact))
    }

    fn is_valid(code: &str) -> bool {
        match code.strip_prefix('+') {
            Some(digits) => {
                (1..=4).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
            }
            None => false,
        }
    }

    /// Get the dial code as a string slice, including the '+'.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for DialCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DialCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DialCode::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for DialCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
