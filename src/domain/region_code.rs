//! RegionCode value object.

use super::errors::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An ISO 3166-1 alpha-2 region code, stored upper-case.
///
/// # Example
///
/// ```
/// use phone_input::domain::RegionCode;
///
/// let region = RegionCode::new("gb").unwrap();
/// assert_eq!(region.as_str(), "GB");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionCode(String);

impl RegionCode {
    /// Create a new RegionCode from two ASCII letters (any case).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRegionCode` for anything else.
    pub fn new(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        let trimmed = code.trim();

        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidRegionCode(code));
        }

        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Get the region code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for RegionCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RegionCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RegionCode::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
