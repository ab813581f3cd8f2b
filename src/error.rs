//! Error types for the phone input widget.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! None of these escape the event handlers: validation failures degrade to the
//! invalid marker, and only configuration and dataset loading surface to the caller.

use thiserror::Error;

/// Errors reported by the phone-number library while checking a number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The library could not interpret the string as any number
    #[error("Unable to parse phone number '{input}': {reason}")]
    ParseFailure { input: String, reason: String },

    /// The library parsed the number but rejected it for its region
    #[error("Not a valid phone number: {0}")]
    InvalidNumber(String),
}

/// Errors that can occur while loading or querying the country dataset.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read the dataset file
    #[error("Failed to read country dataset '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the dataset JSON
    #[error("Country dataset JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Dataset contained no entries
    #[error("Country dataset is empty")]
    Empty,

    /// No entry with the requested region code
    #[error("Unknown region code: {0}")]
    UnknownRegion(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors returned when the form tries to submit the current number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The phone number has not been validated successfully
    #[error("Phone number is not valid")]
    InvalidPhone,
}

/// Errors parsing a line-oriented widget command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Empty input line
    #[error("Empty command")]
    Empty,

    /// Command keyword not recognized
    #[error("Unknown command: {0}")]
    Unknown(String),

    /// Command requires an argument that was not given
    #[error("Command '{0}' requires an argument")]
    MissingArgument(String),
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convenience type alias for Results with CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::InvalidNumber("+44999".to_string());
        assert_eq!(err.to_string(), "Not a valid phone number: +44999");

        let err = CatalogError::UnknownRegion("ZZ".to_string());
        assert_eq!(err.to_string(), "Unknown region code: ZZ");

        let err = CatalogError::Empty;
        assert_eq!(err.to_string(), "Country dataset is empty");

        let err = CommandError::Unknown("jump".to_string());
        assert_eq!(err.to_string(), "Unknown command: jump");

        let err = SubmitError::InvalidPhone;
        assert_eq!(err.to_string(), "Phone number is not valid");
    }

    #[test]
    fn test_parse_failure_variant() {
        let err = ValidationError::ParseFailure {
            input: "+abc".to_string(),
            reason: "not a number".to_string(),
        };
        assert!(err.to_string().contains("+abc"));
        assert!(err.to_string().contains("not a number"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            var: "PHONE_INPUT_FLAG_SIZE".to_string(),
            reason: "Must be one of 16, 24, 32, 48, 64".to_string(),
        };
        assert!(err.to_string().contains("PHONE_INPUT_FLAG_SIZE"));
    }
}
