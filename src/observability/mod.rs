//! Observability module for monitoring and metrics.
//!
//! Counters for validation outcomes, search debouncing and selections, plus
//! a small operation timer that logs through `tracing`.

pub mod metrics;

pub use metrics::{MetricsTracker, Timer};
