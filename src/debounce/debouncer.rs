//! Deadline-based debouncer.
//!
//! This module holds at most one pending value. Scheduling a new value
//! replaces the old one and restarts the delay, so only the last value of a
//! burst is released, no sooner than `delay` after it was scheduled.
//!
//! Time is passed in by the caller; the event loop awaits [`Debouncer::deadline`]
//! and then calls [`Debouncer::take_due`].

use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    due_at: Instant,
}

/// A trailing-edge debouncer with a single pending slot.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `value`, cancelling any pending one.
    ///
    /// Returns `true` if a pending value was replaced.
    pub fn schedule(&mut self, value: T, now: Instant) -> bool {
        let replaced = self.pending.is_some();
        self.pending = Some(Pending {
            value,
            due_at: now + self.delay,
        });
        replaced
    }

    /// When the pending value becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due_at)
    }

    /// Take the pending value if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if pending.due_at <= now => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Drop the pending value without releasing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.value)
    }
}
