//! Query String Builder
//!
//! Builds query strings from a set of key-value pairs, omitting keys whose
//! value is the empty string. Shared by every call site that maps optional
//! form fields onto request parameters.

use urlencoding::encode;

/// `Some(value)` unless the string is empty. Optional form fields use the
/// empty string as their "not selected" marker.
pub fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Ordered collection of query parameters
#[derive(Debug, Default)]
pub struct QueryBuilder {
    pairs: Vec<(String, String)>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl ToString) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    /// Push the pair only when the value is non-empty
    pub fn push_non_empty(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.push(key, value);
        }
    }

    /// Render as a URL suffix: `?a=1&b=2`, or the empty string when no
    /// pairs were pushed. Values are percent-encoded.
    pub fn suffix(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }

        let joined = self
            .pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("?{}", joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder_renders_nothing() {
        assert_eq!(QueryBuilder::new().suffix(), "");
    }

    #[test]
    fn test_pairs_join_in_insertion_order() {
        let mut query = QueryBuilder::new();
        query.push("page", 2);
        query.push("page_size", 12);
        assert_eq!(query.suffix(), "?page=2&page_size=12");
    }

    #[test]
    fn test_empty_values_are_omitted() {
        let mut query = QueryBuilder::new();
        query.push("page", 1);
        query.push_non_empty("body_part", "");
        query.push_non_empty("level", "Beginner");
        assert_eq!(query.suffix(), "?page=1&level=Beginner");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let mut query = QueryBuilder::new();
        query.push_non_empty("equipment", "E-Z Curl Bar");
        assert_eq!(query.suffix(), "?equipment=E-Z%20Curl%20Bar");
    }

    #[test]
    fn test_non_empty_helper() {
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("Chest"), Some("Chest".to_string()));
    }
}
