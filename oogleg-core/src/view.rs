//! View model derived from a state snapshot.
//!
//! Renderers only ever look at a [`PageView`]; they never format URLs or
//! decide which layout to show on their own.

use crate::format::{breadcrumb, extract_domain, format_count, format_title};
use crate::state::ClientState;
use crate::types::SearchResult;

/// Description shown under every result. The API does not return snippets.
pub const RESULT_SNIPPET: &str =
    "Relevant content found for your search query. Click to explore more information.";

/// Shown when a search completed without a result set.
pub const NO_RESULTS_MESSAGE: &str = "No results found. Try a different search term.";

/// Label of the search affordance while a request is in flight.
pub const SEARCHING_LABEL: &str = "Searching...";

/// Everything needed to draw the page once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Contents of the search box.
    pub query: String,
    /// Whether the "×" clear affordance is shown.
    pub show_clear: bool,
    /// A search is in flight; search affordances are disabled.
    pub loading: bool,
    /// Which layout to draw.
    pub layout: Layout,
}

/// Landing page before the first search, results page afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// Centered brand, search box, "Search" and "I'm Feeling Lucky".
    Landing,
    /// Condensed header followed by the results body.
    Results(ResultsBody),
}

/// Body of the results layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsBody {
    /// A search is in flight.
    Searching,
    /// The last result set.
    Listing {
        /// `About N results for "query"`
        summary: String,
        /// One entry per result URL, in API order.
        entries: Vec<ResultEntry>,
    },
    /// No result set to show.
    NoResults,
}

/// One rendered search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultEntry {
    /// Result URL as returned by the API
    pub url: String,
    /// Host of the URL
    pub domain: String,
    /// Title derived from the last path segment
    pub title: String,
    /// Domain plus elided URL, shown above the title
    pub breadcrumb: String,
    /// Placeholder description under the title
    pub snippet: &'static str,
}

impl ResultEntry {
    /// Derives display fields from a result URL.
    pub fn from_url(url: &str) -> Self {
        Self {
            url: url.to_string(),
            domain: extract_domain(url),
            title: format_title(url),
            breadcrumb: breadcrumb(url),
            snippet: RESULT_SNIPPET,
        }
    }
}

impl PageView {
    /// Builds the view for `state`.
    pub fn from_state(state: &ClientState) -> Self {
        let layout = if !state.has_searched {
            Layout::Landing
        } else if state.loading {
            Layout::Results(ResultsBody::Searching)
        } else {
            match &state.search_results {
                Some(results) => Layout::Results(listing(results)),
                None => Layout::Results(ResultsBody::NoResults),
            }
        };

        Self {
            query: state.query.clone(),
            show_clear: state.shows_clear(),
            loading: state.loading,
            layout,
        }
    }

    /// Label of the landing "Search" button.
    pub fn search_label(&self) -> &'static str {
        if self.loading { SEARCHING_LABEL } else { "Search" }
    }
}

/// `About 1,234 results for "cats"`
pub fn results_summary(results: &SearchResult) -> String {
    format!(
        "About {} results for \"{}\"",
        format_count(results.count),
        results.query
    )
}

fn listing(results: &SearchResult) -> ResultsBody {
    ResultsBody::Listing {
        summary: results_summary(results),
        entries: results
            .results
            .iter()
            .map(|url| ResultEntry::from_url(url))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searched(results: Option<SearchResult>) -> ClientState {
        ClientState {
            query: "cats".to_string(),
            search_results: results,
            has_searched: true,
            ..ClientState::default()
        }
    }

    #[test]
    fn test_landing_before_first_search() {
        let view = PageView::from_state(&ClientState::new());
        assert_eq!(view.layout, Layout::Landing);
        assert!(!view.show_clear);
        assert_eq!(view.search_label(), "Search");
    }

    #[test]
    fn test_landing_search_label_while_loading() {
        let state = ClientState {
            query: "cats".to_string(),
            loading: true,
            ..ClientState::default()
        };
        let view = PageView::from_state(&state);

        assert_eq!(view.layout, Layout::Landing);
        assert_eq!(view.search_label(), SEARCHING_LABEL);
    }

    #[test]
    fn test_results_listing() {
        let results = SearchResult::new(
            1234,
            "cats",
            vec![
                "https://wikipedia.org/wiki/Cat-facts".to_string(),
                "https://example.com/".to_string(),
            ],
        );
        let view = PageView::from_state(&searched(Some(results)));

        let Layout::Results(ResultsBody::Listing { summary, entries }) = view.layout else {
            panic!("expected a result listing");
        };
        assert_eq!(summary, "About 1,234 results for \"cats\"");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].domain, "wikipedia.org");
        assert_eq!(entries[0].title, "Cat Facts");
        assert_eq!(entries[1].title, "example.com");
        assert!(entries.iter().all(|entry| entry.snippet == RESULT_SNIPPET));
    }

    #[test]
    fn test_results_searching_while_loading() {
        let mut state = searched(Some(SearchResult::empty("cats")));
        state.loading = true;

        let view = PageView::from_state(&state);
        assert_eq!(view.layout, Layout::Results(ResultsBody::Searching));
    }

    #[test]
    fn test_results_without_result_set() {
        let view = PageView::from_state(&searched(None));
        assert_eq!(view.layout, Layout::Results(ResultsBody::NoResults));
    }
}
