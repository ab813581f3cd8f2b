//! Configuration management for the phone input widget.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is honored when present; every variable is optional.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Flag image sizes served by the flag service.
pub const FLAG_SIZES: [u16; 5] = [16, 24, 32, 48, 64];

/// Visual style of the flag images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagStyle {
    Flat,
    Shiny,
}

impl FlagStyle {
    /// Path segment used by the flag service.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagStyle::Flat => "flat",
            FlagStyle::Shiny => "shiny",
        }
    }
}

/// Configuration for the phone input widget.
#[derive(Debug, Clone)]
pub struct Config {
    /// Delay before a search keystroke re-filters the country list (default: 300ms)
    pub search_debounce_ms: u64,

    /// Base URL of the flag image service (default: "https://flagsapi.com")
    pub flag_base_url: String,

    /// Flag image style (default: shiny)
    pub flag_style: FlagStyle,

    /// Flag image size in pixels (default: 24)
    pub flag_size: u16,

    /// Optional country dataset replacing the embedded table
    pub countries_file: Option<PathBuf>,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONE_INPUT_SEARCH_DEBOUNCE_MS`: Search debounce in milliseconds (default: 300)
    /// - `PHONE_INPUT_FLAG_BASE_URL`: Flag service base URL (default: "https://flagsapi.com")
    /// - `PHONE_INPUT_FLAG_STYLE`: "flat" or "shiny" (default: "shiny")
    /// - `PHONE_INPUT_FLAG_SIZE`: 16, 24, 32, 48 or 64 (default: 24)
    /// - `PHONE_INPUT_COUNTRIES_FILE`: Path to a country dataset JSON file
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let search_debounce_ms =
            Self::parse_env_u64("PHONE_INPUT_SEARCH_DEBOUNCE_MS", defaults.search_debounce_ms)?;

        let flag_base_url = env::var("PHONE_INPUT_FLAG_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.flag_base_url);

        // Validate flag URL format
        if !flag_base_url.starts_with("http://") && !flag_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "PHONE_INPUT_FLAG_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let flag_style = match env::var("PHONE_INPUT_FLAG_STYLE") {
            Ok(val) => Self::parse_flag_style(&val)?,
            Err(_) => defaults.flag_style,
        };

        let flag_size = Self::parse_env_u16("PHONE_INPUT_FLAG_SIZE", defaults.flag_size)?;
        if !FLAG_SIZES.contains(&flag_size) {
            return Err(ConfigError::InvalidValue {
                var: "PHONE_INPUT_FLAG_SIZE".to_string(),
                reason: format!("Must be one of {:?}, got: {}", FLAG_SIZES, flag_size),
            });
        }

        let countries_file = env::var("PHONE_INPUT_COUNTRIES_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            search_debounce_ms,
            flag_base_url,
            flag_style,
            flag_size,
            countries_file,
            log_level,
        })
    }

    /// Search debounce as a `Duration`.
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    fn parse_flag_style(val: &str) -> ConfigResult<FlagStyle> {
        match val.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(FlagStyle::Flat),
            "shiny" => Ok(FlagStyle::Shiny),
            _ => Err(ConfigError::InvalidValue {
                var: "PHONE_INPUT_FLAG_STYLE".to_string(),
                reason: format!("Must be 'flat' or 'shiny', got: {}", val),
            }),
        }
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            search_debounce_ms: 300,
            flag_base_url: "https://flagsapi.com".to_string(),
            flag_style: FlagStyle::Shiny,
            flag_size: 24,
            countries_file: None,
            log_level: "error".to_string(),
        }
    }
}
