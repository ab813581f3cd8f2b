//! Widget controller.
//!
//! Routes UI events to the country selector and the phone validator, and
//! keeps the state that lives between events: the phone field text, the
//! pending search, and the submit error flag.

use crate::catalog::CountryCatalog;
use crate::config::Config;
use crate::debounce::Debouncer;
use crate::error::SubmitError;
use crate::models::{PhoneValidationResult, SelectionState, ValidationState};
use crate::observability::{MetricsTracker, Timer};
use crate::phone::{LibPhoneNumber, PhoneNumberLibrary, PhoneValidator};
use crate::selector::{render_countries, CountrySelector, FlagUrlBuilder};
use crate::widget::events::WidgetEvent;
use crate::widget::view::{SelectedCountryView, WidgetView};
use serde::Serialize;
use std::sync::Arc;
use tokio::time::Instant;

/// The validated number handed over when the form submits.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SubmittedPhone {
    pub e164: String,
    pub national: String,
}

/// Country selector and phone validator wired together.
pub struct PhoneInputWidget<L: PhoneNumberLibrary = LibPhoneNumber> {
    selector: CountrySelector,
    validator: PhoneValidator<L>,
    flags: FlagUrlBuilder,
    search: Debouncer<String>,
    search_text: String,
    input_text: String,
    submit_error: bool,
    metrics: MetricsTracker,
}

impl PhoneInputWidget<LibPhoneNumber> {
    /// Create a widget backed by the `phonenumber` crate.
    pub fn new(catalog: Arc<CountryCatalog>, config: &Config) -> Self {
        Self::with_library(catalog, LibPhoneNumber::new(), config)
    }
}

impl<L: PhoneNumberLibrary> PhoneInputWidget<L> {
    /// Create a widget over any [`PhoneNumberLibrary`].
    pub fn with_library(catalog: Arc<CountryCatalog>, library: L, config: &Config) -> Self {
        Self {
            selector: CountrySelector::new(catalog),
            validator: PhoneValidator::with_library(library),
            flags: FlagUrlBuilder::from_config(config),
            search: Debouncer::new(config.search_debounce()),
            search_text: String::new(),
            input_text: String::new(),
            submit_error: false,
            metrics: MetricsTracker::new(),
        }
    }

    /// Record metrics into `metrics` instead of a private tracker.
    pub fn with_metrics(mut self, metrics: MetricsTracker) -> Self {
        self.metrics = metrics;
        self
    }

    /// Register a callback fired after each country selection.
    pub fn on_select<F>(&mut self, listener: F)
    where
        F: FnMut(&SelectionState) + Send + 'static,
    {
        self.selector.on_select(listener);
    }

    /// Handle one UI event.
    pub fn handle(&mut self, event: WidgetEvent, now: Instant) {
        tracing::trace!(event = ?event, "Handling widget event");

        match event {
            WidgetEvent::Click(target) => self.selector.click(target),
            WidgetEvent::SearchInput(query) => self.search_input(query, now),
            WidgetEvent::SelectCountry(region) => {
                self.select_country(&region);
            }
            WidgetEvent::PhoneInput(text) => {
                self.phone_input(text);
            }
            WidgetEvent::Submit => {
                if let Err(err) = self.submit() {
                    tracing::debug!(error = %err, "Submit rejected");
                }
            }
        }
    }

    /// Record a search keystroke; the list is filtered once the debounce expires.
    pub fn search_input(&mut self, query: String, now: Instant) {
        self.search_text = query.clone();
        let superseded = self.search.schedule(query, now);
        self.metrics.track_search_scheduled(superseded);
    }

    /// When the pending search becomes due, if one is pending.
    pub fn search_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    /// Apply the pending search if its debounce has expired.
    ///
    /// Returns `true` if the visible list was re-filtered.
    pub fn flush_search(&mut self, now: Instant) -> bool {
        let Some(query) = self.search.take_due(now) else {
            return false;
        };

        let timer = Timer::new("country_search");
        let count = self.selector.apply_search(&query);
        self.metrics.track_search_applied(timer.finish(), count);
        true
    }

    /// Drop any pending search without applying it.
    pub fn cancel_pending_search(&mut self) {
        if let Some(query) = self.search.cancel() {
            tracing::debug!(query = %query, "Pending search dropped");
        }
    }

    /// Select a country by region code, then clear and recompute the phone formats.
    ///
    /// Unknown region codes are logged and ignored.
    pub fn select_country(&mut self, region_code: &str) -> Option<PhoneValidationResult> {
        match self.selector.select_region(region_code) {
            Ok(selection) => {
                if let Some(region) = &selection.selected_region_code {
                    self.metrics.track_selection(region);
                }
                tracing::info!(
                    region = %selection.region_code_str(),
                    dial_code = %selection.dial_code_str(),
                    "Country changed"
                );
                self.validator.clear_formatted();
                Some(self.revalidate())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Ignoring selection");
                None
            }
        }
    }

    /// Replace the phone field text and revalidate.
    pub fn phone_input(&mut self, text: String) -> PhoneValidationResult {
        self.input_text = text;
        self.revalidate()
    }

    /// Validate the current field text under the current selection.
    ///
    /// A Valid result overwrites the field with the national format.
    pub fn revalidate(&mut self) -> PhoneValidationResult {
        let dial_code = self.selector.selection().dial_code_str();
        let result = self.validator.validate_input(dial_code, &self.input_text);
        self.metrics
            .track_validation(&result, self.validator.last_error());

        if result.state == ValidationState::Valid {
            self.input_text = result.national.clone();
            self.submit_error = false;
        }

        result
    }

    /// Hand over the validated number, or flag the submit error.
    pub fn submit(&mut self) -> Result<SubmittedPhone, SubmitError> {
        let result = self.validator.last_result();

        if !result.is_submittable() {
            self.submit_error = true;
            return Err(SubmitError::InvalidPhone);
        }

        self.submit_error = false;
        let submitted = SubmittedPhone {
            e164: result.e164.clone(),
            national: result.national.clone(),
        };
        tracing::info!(e164 = %submitted.e164, "Phone number submitted");
        Ok(submitted)
    }

    /// Snapshot of what should be displayed.
    pub fn view(&self) -> WidgetView {
        let selected = self.selector.selected_entry().map(|entry| SelectedCountryView {
            name: entry.name.clone(),
            dial_code: entry.dial_code.to_string(),
            region_code: entry.region_code.to_string(),
            flag_url: self.flags.url(&entry.region_code),
        });

        WidgetView {
            list_open: self.selector.is_open(),
            search_text: self.search_text.clone(),
            countries: render_countries(self.selector.visible(), &self.flags),
            selected,
            input_text: self.input_text.clone(),
            invalid_marker: self.validator.invalid_marker(),
            validation: self.validator.last_result().clone(),
            submit_error: self.submit_error,
        }
    }

    pub fn selector(&self) -> &CountrySelector {
        &self.selector
    }

    pub fn validator(&self) -> &PhoneValidator<L> {
        &self.validator
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }
}
