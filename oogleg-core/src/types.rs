//! Data types exchanged with the search API.

use serde::{Deserialize, Serialize};

/// Result set returned by the search API.
///
/// The page never inspects it beyond rendering; `results` keeps the order the
/// API produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Total number of matching documents reported by the API.
    pub count: u64,
    /// Query string echoed back by the API.
    pub query: String,
    /// Result URLs in ranking order.
    pub results: Vec<String>,
}

impl SearchResult {
    /// Creates a result set from its parts.
    pub fn new(count: u64, query: impl Into<String>, results: Vec<String>) -> Self {
        Self {
            count,
            query: query.into(),
            results,
        }
    }

    /// Empty result set echoing `query`.
    pub fn empty(query: impl Into<String>) -> Self {
        Self::new(0, query, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_api_document() {
        let body = r#"{"count": 1234, "query": "cats", "results": ["https://wikipedia.org/wiki/Cat-facts"]}"#;
        let result: SearchResult = serde_json::from_str(body).unwrap();

        assert_eq!(result.count, 1234);
        assert_eq!(result.query, "cats");
        assert_eq!(result.results, vec!["https://wikipedia.org/wiki/Cat-facts"]);
    }

    #[test]
    fn test_rejects_negative_count() {
        let body = r#"{"count": -1, "query": "cats", "results": []}"#;
        assert!(serde_json::from_str::<SearchResult>(body).is_err());
    }

    #[test]
    fn test_ignores_unknown_fields() {
        let body = r#"{"count": 0, "query": "x", "results": [], "took_ms": 4}"#;
        let result: SearchResult = serde_json::from_str(body).unwrap();
        assert_eq!(result, SearchResult::empty("x"));
    }
}
