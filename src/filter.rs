//! Fuzzy filtering of records over their display properties.
//!
//! A record matches when every whitespace-separated token of the filter
//! text matches at least one configured property value as a
//! case-insensitive character subsequence. Tokens may be given in any
//! order; an empty filter matches everything.

use crate::store::Record;

/// Filter `elements` by `filter` across `properties`, preserving order.
pub fn fuzzy_filter<'a>(
    elements: Vec<&'a Record>,
    filter: &str,
    properties: &[String],
) -> Vec<&'a Record> {
    if filter.trim().is_empty() {
        return elements;
    }
    elements
        .into_iter()
        .filter(|record| record_matches(record, filter, properties))
        .collect()
}

/// True when every token of `filter` fuzzy-matches some property value.
pub fn record_matches(record: &Record, filter: &str, properties: &[String]) -> bool {
    filter.split_whitespace().all(|token| {
        properties
            .iter()
            .any(|property| subsequence_match(&record.display_value(property), token))
    })
}

/// Case-insensitive subsequence match: the needle's characters appear in
/// the haystack in order, not necessarily contiguously.
fn subsequence_match(haystack: &str, needle: &str) -> bool {
    let mut haystack_chars = haystack.chars().flat_map(char::to_lowercase);
    needle
        .chars()
        .flat_map(char::to_lowercase)
        .all(|needle_char| haystack_chars.any(|hay_char| hay_char == needle_char))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn book(title: &str, author: &str) -> Record {
        [
            ("_id".to_string(), json!(title.to_lowercase())),
            ("title".to_string(), json!(title)),
            ("author".to_string(), json!(author)),
        ]
        .into_iter()
        .collect()
    }

    fn properties() -> Vec<String> {
        vec!["title".to_string(), "author".to_string()]
    }

    #[test]
    fn empty_filter_passes_everything() {
        let a = book("Dune", "Herbert");
        let b = book("Solaris", "Lem");
        let filtered = fuzzy_filter(vec![&a, &b], "", &properties());
        assert_eq!(filtered.len(), 2);

        let filtered = fuzzy_filter(vec![&a, &b], "   ", &properties());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn match_is_case_insensitive() {
        let a = book("Dune", "Herbert");
        assert!(record_matches(&a, "dUnE", &properties()));
    }

    #[test]
    fn subsequence_allows_gaps() {
        let a = book("Neuromancer", "Gibson");
        assert!(record_matches(&a, "nrmcr", &properties()));
        assert!(!record_matches(&a, "nxq", &properties()));
    }

    #[test]
    fn tokens_match_in_any_order() {
        let a = book("Dune", "Herbert");
        assert!(record_matches(&a, "herbert dune", &properties()));
        assert!(record_matches(&a, "dune herbert", &properties()));
        assert!(!record_matches(&a, "dune lem", &properties()));
    }

    #[test]
    fn only_configured_properties_are_searched() {
        let a = book("Dune", "Herbert");
        // `_id` is not in the configured properties, so it is invisible
        // to the filter.
        assert!(!record_matches(&a, "dune", &["author".to_string()]));
    }
}
