//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided dial code is not "+" followed by 1-4 digits.
    InvalidDialCode(String),

    /// The provided region code is not two ASCII letters.
    InvalidRegionCode(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDialCode(code) => write!(f, "Invalid dial code: {}", code),
            Self::InvalidRegionCode(code) => write!(f, "Invalid region code: {}", code),
        }
    }
}

impl std::error::Error for DomainError {}
