//! Demo search API
//!
//! Answers `GET /api/search?query=...` from a small fixed URL list so the page
//! can be used without the real search backend. A URL matches when it
//! contains any whitespace-separated query term, ignoring case. There is no
//! ranking; matches keep corpus order.

use axum::Router;
use axum::extract::Query;
use axum::response::Json;
use axum::routing::get;
use oogleg_core::SearchResult;
use serde::Deserialize;
use tower_http::cors::CorsLayer;

/// URLs the demo API searches over.
pub const DEMO_CORPUS: &[&str] = &[
    "https://www.ics.uci.edu/~lopes/",
    "https://www.ics.uci.edu/faculty/profiles/view_faculty-cristina-lopes",
    "https://mondego.ics.uci.edu/projects/cristina-lopes-research-group",
    "https://www.ics.uci.edu/community/news/machine-learning-seminar-series",
    "https://www.ics.uci.edu/~welling/teaching/machine-learning-course",
    "https://archive.ics.uci.edu/ml/index",
    "https://cml.ics.uci.edu/",
    "https://www.acm.org/",
    "https://acm.ics.uci.edu/about/acm-at-uci",
    "https://dl.acm.org/doi/code-clones-in-the-wild",
    "https://mswe.ics.uci.edu/",
    "https://mswe.ics.uci.edu/admissions/master-of-software-engineering-requirements",
    "https://www.informatics.uci.edu/grad/mswe-master-of-software-engineering",
    "https://www.ics.uci.edu/~thornton/ics46/Notes/search-engines",
    "https://wikipedia.org/wiki/Cat-facts",
    "https://en.wikipedia.org/wiki/Information-retrieval",
];

/// Query string of a search request.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Raw query text
    #[serde(default)]
    pub query: String,
}

/// Searches [`DEMO_CORPUS`] for `query`.
pub fn demo_search(query: &str) -> SearchResult {
    let terms: Vec<String> = query
        .split_whitespace()
        .map(str::to_lowercase)
        .collect();

    let results: Vec<String> = DEMO_CORPUS
        .iter()
        .filter(|url| {
            let url = url.to_lowercase();
            terms.iter().any(|term| url.contains(term.as_str()))
        })
        .map(|url| url.to_string())
        .collect();

    SearchResult::new(results.len() as u64, query, results)
}

/// Handler for `GET /api/search`.
pub async fn api_search(Query(params): Query<SearchParams>) -> Json<SearchResult> {
    let result = demo_search(&params.query);
    tracing::info!(query = %params.query, count = result.count, "Demo search");
    Json(result)
}

/// Router serving the demo API, open to cross-origin callers.
pub fn router() -> Router {
    Router::new()
        .route("/api/search", get(api_search))
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_any_term_case_insensitively() {
        let result = demo_search("Cristina LOPES");

        assert_eq!(result.query, "Cristina LOPES");
        assert_eq!(result.count as usize, result.results.len());
        assert!(result.results.contains(&"https://www.ics.uci.edu/~lopes/".to_string()));
        assert!(
            result
                .results
                .iter()
                .all(|url| url.contains("cristina") || url.contains("lopes"))
        );
    }

    #[test]
    fn test_keeps_corpus_order() {
        let result = demo_search("acm");
        let positions: Vec<usize> = result
            .results
            .iter()
            .map(|url| DEMO_CORPUS.iter().position(|c| *c == url.as_str()).unwrap())
            .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_blank_query_matches_nothing() {
        assert_eq!(demo_search("   "), SearchResult::empty("   "));
    }

    #[test]
    fn test_every_lucky_query_has_results() {
        for query in oogleg_core::LUCKY_QUERIES {
            assert!(demo_search(query).count > 0, "no demo results for {query}");
        }
    }
}
