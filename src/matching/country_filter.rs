//! Substring filter over the country table.

use crate::models::CountryEntry;

/// Normalize a search query: trim surrounding whitespace and lower-case it.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Return the entries whose name contains `query`, case-insensitively.
///
/// An empty (or whitespace-only) query returns every entry. Dataset order is
/// preserved in both cases.
pub fn filter_countries(query: &str, entries: &[CountryEntry]) -> Vec<CountryEntry> {
    let needle = normalize_query(query);

    if needle.is_empty() {
        return entries.to_vec();
    }

    entries
        .iter()
        .filter(|entry| entry.name_contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DialCode, RegionCode};

    fn entry(name: &str, dial: &str, code: &str) -> CountryEntry {
        CountryEntry::new(
            name,
            DialCode::new(dial).unwrap(),
            RegionCode::new(code).unwrap(),
        )
    }

    fn sample() -> Vec<CountryEntry> {
        vec![
            entry("United Kingdom", "+44", "GB"),
            entry("Germany", "+49", "DE"),
            entry("United States", "+1", "US"),
            entry("Finland", "+358", "FI"),
        ]
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  GerMany "), "germany");
        assert_eq!(normalize_query("   "), "");
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let entries = sample();
        assert_eq!(filter_countries("", &entries), entries);
        assert_eq!(filter_countries("   ", &entries), entries);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let entries = sample();

        let names: Vec<String> = filter_countries("UNITED", &entries)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["United Kingdom", "United States"]);

        let names: Vec<String> = filter_countries("land", &entries)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Finland"]);
    }

    #[test]
    fn test_no_matches() {
        assert!(filter_countries("atlantis", &sample()).is_empty());
    }

    #[test]
    fn test_query_does_not_match_dial_code() {
        assert!(filter_countries("+44", &sample()).is_empty());
    }
}
