use phone_input::error::{ValidationError, ValidationResult};
use phone_input::models::NumberFormat;
use phone_input::PhoneNumberLibrary;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Mock phone-number library for testing.
///
/// Numbers registered with `add_valid` parse and validate; numbers registered
/// with `add_unparseable` fail to parse; anything else parses but is rejected.
/// Tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockPhoneLibrary {
    valid: Arc<Mutex<HashMap<String, String>>>,
    unparseable: Arc<Mutex<HashSet<String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockPhoneLibrary {
    /// Create a new mock that rejects everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a valid full number and its national format.
    pub fn add_valid(&self, full_number: &str, national: &str) {
        let mut valid = self.valid.lock().unwrap();
        valid.insert(full_number.to_string(), national.to_string());
    }

    /// Register a full number that fails to parse.
    pub fn add_unparseable(&self, full_number: &str) {
        let mut unparseable = self.unparseable.lock().unwrap();
        unparseable.insert(full_number.to_string());
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn increment_call_count(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl PhoneNumberLibrary for MockPhoneLibrary {
    type Parsed = String;

    fn parse(&self, full_number: &str) -> ValidationResult<String> {
        self.increment_call_count("parse");

        if self.unparseable.lock().unwrap().contains(full_number) {
            return Err(ValidationError::ParseFailure {
                input: full_number.to_string(),
                reason: "mock parse failure".to_string(),
            });
        }
        Ok(full_number.to_string())
    }

    fn is_valid(&self, number: &String) -> bool {
        self.increment_call_count("is_valid");
        self.valid.lock().unwrap().contains_key(number)
    }

    fn format(&self, number: &String, format: NumberFormat) -> String {
        self.increment_call_count("format");

        match format {
            NumberFormat::E164 | NumberFormat::International => number.clone(),
            NumberFormat::National => self
                .valid
                .lock()
                .unwrap()
                .get(number)
                .cloned()
                .unwrap_or_default(),
        }
    }
}
