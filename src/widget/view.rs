//! Serializable snapshot of what the widget displays.

use crate::models::PhoneValidationResult;
use crate::selector::CountryListItem;
use serde::Serialize;

/// The toggle control's contents once a country is chosen.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SelectedCountryView {
    pub name: String,
    pub dial_code: String,
    pub region_code: String,
    pub flag_url: String,
}

/// Everything a renderer needs to draw the widget.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct WidgetView {
    /// Whether the country list is shown
    pub list_open: bool,

    /// Text in the country search box
    pub search_text: String,

    /// Countries currently listed
    pub countries: Vec<CountryListItem>,

    /// Country shown on the toggle control
    pub selected: Option<SelectedCountryView>,

    /// Text shown in the phone field
    pub input_text: String,

    /// Invalid styling on the phone field
    pub invalid_marker: bool,

    /// Latest validation
    pub validation: PhoneValidationResult,

    /// Error panel after a rejected submit
    pub submit_error: bool,
}
