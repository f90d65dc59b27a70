//! Client-side state of the search page and the operations that mutate it.

use crate::types::SearchResult;

/// Preset queries cycled through by "I'm Feeling Lucky".
pub const LUCKY_QUERIES: [&str; 4] = [
    "cristina lopes",
    "machine learning",
    "ACM",
    "master of software engineering",
];

/// Everything the page renders from.
///
/// `loading` is only set while a search request is in flight. `lucky_index`
/// always stays within `LUCKY_QUERIES`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientState {
    /// Current contents of the search box.
    pub query: String,
    /// Results of the last successful search.
    pub search_results: Option<SearchResult>,
    /// A search request is in flight.
    pub loading: bool,
    /// At least one search succeeded since the last reset.
    pub has_searched: bool,
    /// Index of the next lucky query.
    pub lucky_index: usize,
}

impl ClientState {
    /// Creates the initial landing state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the query text. Called on every keystroke.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Fills the search box with the next lucky query and returns it.
    pub fn advance_lucky(&mut self) -> &'static str {
        let lucky = LUCKY_QUERIES[self.lucky_index];
        self.query = lucky.to_string();
        self.lucky_index = (self.lucky_index + 1) % LUCKY_QUERIES.len();
        lucky
    }

    /// Returns to the landing layout. The lucky rotation is kept.
    pub fn reset(&mut self) {
        self.has_searched = false;
        self.search_results = None;
        self.query.clear();
    }

    /// Empties the search box without touching results.
    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Query that a search would send, or `None` if it is blank.
    pub fn searchable_query(&self) -> Option<&str> {
        if self.query.trim().is_empty() {
            None
        } else {
            Some(&self.query)
        }
    }

    /// Whether the "×" clear affordance is shown.
    pub fn shows_clear(&self) -> bool {
        !self.query.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searched_state() -> ClientState {
        ClientState {
            query: "cats".to_string(),
            search_results: Some(SearchResult::empty("cats")),
            loading: false,
            has_searched: true,
            lucky_index: 2,
        }
    }

    #[test]
    fn test_advance_lucky_cycles_through_all_queries() {
        let mut state = ClientState::new();

        let seen: Vec<&str> = (0..LUCKY_QUERIES.len())
            .map(|_| state.advance_lucky())
            .collect();
        assert_eq!(seen, LUCKY_QUERIES);

        assert_eq!(state.advance_lucky(), LUCKY_QUERIES[0]);
        assert_eq!(state.query, LUCKY_QUERIES[0]);
        assert_eq!(state.lucky_index, 1);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut once = searched_state();
        once.reset();

        let mut twice = searched_state();
        twice.reset();
        twice.reset();

        assert_eq!(once, twice);
        assert_eq!(once.query, "");
        assert!(once.search_results.is_none());
        assert!(!once.has_searched);
        assert_eq!(once.lucky_index, 2);
    }

    #[test]
    fn test_clear_query_keeps_results() {
        let mut state = searched_state();
        state.clear_query();

        assert_eq!(state.query, "");
        assert!(state.has_searched);
        assert!(state.search_results.is_some());
    }

    #[test]
    fn test_clear_then_set_query() {
        let mut state = searched_state();
        state.clear_query();
        state.set_query("dogs");
        assert_eq!(state.query, "dogs");
    }

    #[test]
    fn test_searchable_query_rejects_blank_input() {
        let mut state = ClientState::new();
        assert_eq!(state.searchable_query(), None);

        state.set_query("   \t");
        assert_eq!(state.searchable_query(), None);

        state.set_query("  cats ");
        assert_eq!(state.searchable_query(), Some("  cats "));
    }

    #[test]
    fn test_shows_clear_only_with_input() {
        let mut state = ClientState::new();
        assert!(!state.shows_clear());

        state.set_query(" ");
        assert!(state.shows_clear());
    }
}
