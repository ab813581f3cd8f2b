//! Country search and selection behavior.

mod common;
mod mocks;

use common::*;
use mocks::MockPhoneLibrary;
use phone_input::{ClickTarget, CountrySelector, ValidationState};

/// Reference filter: the subsequence of `all` whose name contains `query`.
fn expected(query: &str, all: &[phone_input::CountryEntry]) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    all.iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .map(|e| e.name.clone())
        .collect()
}

#[test]
fn test_search_matches_reference_subsequence() {
    let catalog = embedded_catalog();
    let selector = CountrySelector::new(catalog.clone());

    for query in ["a", "united", "UNITED", "land", " ger ", "Guinea", "islands", "xyz", "é"] {
        assert_eq!(
            names(&selector.search(query)),
            expected(query, catalog.entries()),
            "query {:?}",
            query
        );
    }
}

#[test]
fn test_empty_search_returns_full_list_in_order() {
    let catalog = embedded_catalog();
    let selector = CountrySelector::new(catalog.clone());

    assert_eq!(selector.search(""), catalog.entries().to_vec());
    assert_eq!(selector.search("   "), catalog.entries().to_vec());
}

#[test]
fn test_united_matches_in_dataset_order() {
    let selector = CountrySelector::new(sample_catalog());
    assert_eq!(
        names(&selector.search("united")),
        vec!["United Kingdom", "United States"]
    );
    assert_eq!(names(&selector.search("LAND")), vec!["Finland", "Ireland"]);
}

#[test]
fn test_selecting_country_resets_formatted_output() {
    let library = MockPhoneLibrary::new();
    library.add_valid("+12015550123", "(201) 555-0123");
    let mut widget = sample_widget(library);

    widget.select_country("US").unwrap();
    widget.phone_input("2015550123".to_string());
    assert_eq!(widget.validator().e164(), "+12015550123");

    // Under +44 the same digits are rejected; the old +1 formats must not survive
    let result = widget.select_country("GB").unwrap();
    assert_eq!(result.state, ValidationState::Invalid);
    assert_eq!(result.e164, "");
    assert_eq!(result.national, "");
}

#[test]
fn test_selecting_same_country_twice_recomputes() {
    let library = MockPhoneLibrary::new();
    library.add_valid("+12015550123", "(201) 555-0123");
    let mut widget = sample_widget(library.clone());

    widget.select_country("US").unwrap();
    widget.phone_input("2015550123".to_string());
    let parses_before = library.get_call_count("parse");

    let result = widget.select_country("US").unwrap();
    assert!(result.is_valid);
    assert_eq!(result.national, "(201) 555-0123");
    assert_eq!(library.get_call_count("parse"), parses_before + 1);
    assert_eq!(widget.metrics().selections_total(), 2);
}

#[test]
fn test_no_selection_skips_validation() {
    let library = MockPhoneLibrary::new();
    let mut widget = sample_widget(library.clone());

    let result = widget.phone_input("2015550123".to_string());

    assert_eq!(result.state, ValidationState::Empty);
    assert_eq!(library.get_call_count("parse"), 0);
}

#[test]
fn test_list_closes_on_selection_and_outside_click() {
    let mut widget = sample_widget(MockPhoneLibrary::new());

    widget.handle(
        phone_input::WidgetEvent::Click(ClickTarget::Toggle),
        tokio::time::Instant::now(),
    );
    assert!(widget.view().list_open);

    widget.select_country("DE");
    assert!(!widget.view().list_open);

    widget.handle(
        phone_input::WidgetEvent::Click(ClickTarget::Toggle),
        tokio::time::Instant::now(),
    );
    widget.handle(
        phone_input::WidgetEvent::Click(ClickTarget::List),
        tokio::time::Instant::now(),
    );
    assert!(widget.view().list_open);

    widget.handle(
        phone_input::WidgetEvent::Click(ClickTarget::Outside),
        tokio::time::Instant::now(),
    );
    assert!(!widget.view().list_open);
}
