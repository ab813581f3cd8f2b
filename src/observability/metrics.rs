//! Widget metrics tracking.
//!
//! Counters are shared atomics so a tracker can be cloned into the event loop
//! and read from outside it.

use crate::domain::RegionCode;
use crate::error::ValidationError;
use crate::models::{PhoneValidationResult, ValidationState};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Metrics tracker for one widget.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    validations_total: Arc<AtomicU64>,
    valid_total: Arc<AtomicU64>,
    parse_failures_total: Arc<AtomicU64>,
    rejected_total: Arc<AtomicU64>,
    searches_scheduled_total: Arc<AtomicU64>,
    searches_superseded_total: Arc<AtomicU64>,
    searches_applied_total: Arc<AtomicU64>,
    selections_total: Arc<AtomicU64>,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            validations_total: Arc::new(AtomicU64::new(0)),
            valid_total: Arc::new(AtomicU64::new(0)),
            parse_failures_total: Arc::new(AtomicU64::new(0)),
            rejected_total: Arc::new(AtomicU64::new(0)),
            searches_scheduled_total: Arc::new(AtomicU64::new(0)),
            searches_superseded_total: Arc::new(AtomicU64::new(0)),
            searches_applied_total: Arc::new(AtomicU64::new(0)),
            selections_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a validation outcome.
    pub fn track_validation(
        &self,
        result: &PhoneValidationResult,
        error: Option<&ValidationError>,
    ) {
        self.validations_total.fetch_add(1, Ordering::Relaxed);

        match (result.state, error) {
            (ValidationState::Valid, _) => {
                self.valid_total.fetch_add(1, Ordering::Relaxed);
            }
            (ValidationState::Invalid, Some(ValidationError::ParseFailure { .. })) => {
                self.parse_failures_total.fetch_add(1, Ordering::Relaxed);
            }
            (ValidationState::Invalid, _) => {
                self.rejected_total.fetch_add(1, Ordering::Relaxed);
            }
            (ValidationState::Empty, _) => {}
        }

        tracing::trace!(state = ?result.state, "Validation tracked");
    }

    /// Track a search keystroke entering the debouncer.
    pub fn track_search_scheduled(&self, superseded_pending: bool) {
        self.searches_scheduled_total.fetch_add(1, Ordering::Relaxed);

        if superseded_pending {
            self.searches_superseded_total.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("Pending search superseded");
        }
    }

    /// Track a debounced search being applied to the list.
    pub fn track_search_applied(&self, duration_ms: u128, result_count: usize) {
        self.searches_applied_total.fetch_add(1, Ordering::Relaxed);

        tracing::debug!(
            duration_ms = duration_ms,
            result_count = result_count,
            "Search applied"
        );
    }

    /// Track a country selection.
    pub fn track_selection(&self, region: &RegionCode) {
        self.selections_total.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(region = %region, "Selection tracked");
    }

    pub fn validations_total(&self) -> u64 {
        self.validations_total.load(Ordering::Relaxed)
    }

    pub fn valid_total(&self) -> u64 {
        self.valid_total.load(Ordering::Relaxed)
    }

    pub fn parse_failures_total(&self) -> u64 {
        self.parse_failures_total.load(Ordering::Relaxed)
    }

    pub fn rejected_total(&self) -> u64 {
        self.rejected_total.load(Ordering::Relaxed)
    }

    pub fn searches_scheduled_total(&self) -> u64 {
        self.searches_scheduled_total.load(Ordering::Relaxed)
    }

    pub fn searches_superseded_total(&self) -> u64 {
        self.searches_superseded_total.load(Ordering::Relaxed)
    }

    pub fn searches_applied_total(&self) -> u64 {
        self.searches_applied_total.load(Ordering::Relaxed)
    }

    pub fn selections_total(&self) -> u64 {
        self.selections_total.load(Ordering::Relaxed)
    }

    /// Share of validations that ended Valid (0.0 to 1.0).
    pub fn valid_rate(&self) -> f64 {
        let valid = self.valid_total() as f64;
        let total = self.validations_total() as f64;

        if total == 0.0 {
            0.0
        } else {
            valid / total
        }
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Metrics Summary:\n\
             Validations: {}\n\
             Valid: {} ({:.2}% valid rate)\n\
             Parse Failures: {}\n\
             Rejected Numbers: {}\n\
             Searches Scheduled: {}\n\
             Searches Superseded: {}\n\
             Searches Applied: {}\n\
             Selections: {}",
            self.validations_total(),
            self.valid_total(),
            self.valid_rate() * 100.0,
            self.parse_failures_total(),
            self.rejected_total(),
            self.searches_scheduled_total(),
            self.searches_superseded_total(),
            self.searches_applied_total(),
            self.selections_total(),
        )
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Finish the timer and return the elapsed time in milliseconds.
    pub fn finish(self) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        tracing::trace!(
            operation = %self.operation,
            duration_ms = duration_ms,
            "Operation completed"
        );

        duration_ms
    }
}
