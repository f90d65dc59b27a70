//! The search page: client state plus the search invoker.
//!
//! `SearchPage` owns a [`ClientState`] inside a `watch` channel. Every
//! operation publishes a new snapshot, so renderers subscribe instead of
//! polling. All operations take `&self`; share the page behind an `Arc` when
//! an event source and an in-flight search need it at the same time.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::api::SearchApi;
use crate::state::ClientState;
use crate::view::PageView;

/// What a call to [`SearchPage::search`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was blank; nothing was sent.
    Skipped,
    /// The response was stored as the current result set.
    Applied,
    /// The request failed; the previous results were kept.
    Failed,
    /// A newer search started before this one finished; its response was dropped.
    Superseded,
}

/// A single search page instance.
#[derive(Debug)]
pub struct SearchPage {
    api: Arc<dyn SearchApi>,
    state: watch::Sender<ClientState>,
    latest_request: AtomicU64,
}

impl SearchPage {
    /// Creates a page in the landing state backed by `api`.
    pub fn new(api: Arc<dyn SearchApi>) -> Self {
        let (state, _) = watch::channel(ClientState::new());
        Self {
            api,
            state,
            latest_request: AtomicU64::new(0),
        }
    }

    /// Current state.
    pub fn snapshot(&self) -> ClientState {
        self.state.borrow().clone()
    }

    /// View model of the current state.
    pub fn view(&self) -> PageView {
        PageView::from_state(&self.state.borrow())
    }

    /// Receiver notified after every state change.
    pub fn subscribe(&self) -> watch::Receiver<ClientState> {
        self.state.subscribe()
    }

    /// Replaces the query text.
    pub fn set_query(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.send_modify(|state| state.set_query(text));
    }

    /// Fills the search box with the next lucky query and returns it.
    pub fn advance_lucky(&self) -> &'static str {
        let mut lucky = "";
        self.state.send_modify(|state| lucky = state.advance_lucky());
        debug!(query = lucky, "Advanced lucky query");
        lucky
    }

    /// Returns to the landing layout.
    pub fn reset(&self) {
        self.state.send_modify(ClientState::reset);
        debug!("Page reset");
    }

    /// Empties the search box.
    pub fn clear_query(&self) {
        self.state.send_modify(ClientState::clear_query);
    }

    /// Searches for the current query.
    ///
    /// Blank queries are skipped without touching state. Otherwise exactly one
    /// request is sent with the query as typed. Failures are logged and leave
    /// the previous results in place. `loading` is cleared when the latest
    /// request finishes; responses to older requests are discarded.
    pub async fn search(&self) -> SearchOutcome {
        let query = self
            .state
            .borrow()
            .searchable_query()
            .map(str::to_string);
        let Some(query) = query else {
            debug!("Skipping search for blank query");
            return SearchOutcome::Skipped;
        };

        // The request id is taken under the state lock so that starting a
        // search and applying a response never interleave.
        let mut request_id = 0;
        self.state.send_modify(|state| {
            request_id = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
            state.loading = true;
        });
        debug!(request_id, %query, "Search started");

        let response = self.api.search(&query).await;

        let mut outcome = SearchOutcome::Superseded;
        self.state.send_if_modified(|state| {
            if self.latest_request.load(Ordering::SeqCst) != request_id {
                return false;
            }

            match response {
                Ok(result) => {
                    debug!(request_id, count = result.count, "Search succeeded");
                    state.search_results = Some(result);
                    state.has_searched = true;
                    outcome = SearchOutcome::Applied;
                }
                Err(error) => {
                    warn!(request_id, %error, "Search failed");
                    outcome = SearchOutcome::Failed;
                }
            }
            state.loading = false;
            true
        });

        if outcome == SearchOutcome::Superseded {
            debug!(request_id, "Discarded response to superseded search");
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::Notify;

    use super::*;
    use crate::api::MockSearchApi;
    use crate::state::LUCKY_QUERIES;
    use crate::types::SearchResult;

    fn page_with(api: &Arc<MockSearchApi>) -> SearchPage {
        SearchPage::new(api.clone())
    }

    fn cats() -> SearchResult {
        SearchResult::new(
            1234,
            "cats",
            vec!["https://wikipedia.org/wiki/Cat-facts".to_string()],
        )
    }

    #[tokio::test]
    async fn test_blank_query_issues_no_request() {
        let api = Arc::new(MockSearchApi::new());
        let page = page_with(&api);

        for blank in ["", "   ", "\t\n"] {
            page.set_query(blank);
            let before = page.snapshot();

            assert_eq!(page.search().await, SearchOutcome::Skipped);
            assert_eq!(page.snapshot(), before);
        }
        assert_eq!(api.request_count(), 0);
    }

    #[tokio::test]
    async fn test_search_sends_raw_query_once() {
        let api = Arc::new(MockSearchApi::new());
        let page = page_with(&api);

        page.set_query("  cats ");
        assert_eq!(page.search().await, SearchOutcome::Applied);
        assert_eq!(api.requests(), vec!["  cats ".to_string()]);
    }

    #[tokio::test]
    async fn test_successful_search_stores_results() {
        let api = Arc::new(MockSearchApi::new());
        api.push_result(cats());
        let page = page_with(&api);

        page.set_query("cats");
        assert_eq!(page.search().await, SearchOutcome::Applied);

        let state = page.snapshot();
        assert!(state.has_searched);
        assert!(!state.loading);
        assert_eq!(state.search_results, Some(cats()));
    }

    #[tokio::test]
    async fn test_failed_search_keeps_previous_results() {
        let api = Arc::new(MockSearchApi::new());
        api.push_result(cats()).push_failure("connection refused");
        let page = page_with(&api);

        page.set_query("cats");
        page.search().await;
        page.set_query("dogs");
        assert_eq!(page.search().await, SearchOutcome::Failed);

        let state = page.snapshot();
        assert!(state.has_searched);
        assert!(!state.loading);
        assert_eq!(state.search_results, Some(cats()));
        assert_eq!(state.query, "dogs");
    }

    #[tokio::test]
    async fn test_failed_first_search_stays_on_landing() {
        let api = Arc::new(MockSearchApi::new());
        api.push_failure("not json");
        let page = page_with(&api);

        page.set_query("cats");
        assert_eq!(page.search().await, SearchOutcome::Failed);

        let state = page.snapshot();
        assert!(!state.has_searched);
        assert!(state.search_results.is_none());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_loading_is_set_while_request_is_in_flight() {
        let api = Arc::new(MockSearchApi::new());
        let gate = Arc::new(Notify::new());
        api.push_gated(cats(), gate.clone());
        let page = Arc::new(page_with(&api));
        let mut updates = page.subscribe();

        page.set_query("cats");
        let search = tokio::spawn({
            let page = page.clone();
            async move { page.search().await }
        });

        updates.wait_for(|state| state.loading).await.unwrap();
        assert!(!page.snapshot().has_searched);

        gate.notify_one();
        assert_eq!(search.await.unwrap(), SearchOutcome::Applied);
        assert!(!page.snapshot().loading);
    }

    #[tokio::test]
    async fn test_superseded_response_is_discarded() {
        let api = Arc::new(MockSearchApi::new());
        let gate = Arc::new(Notify::new());
        let stale = SearchResult::new(1, "first", vec!["https://stale.example/".to_string()]);
        let fresh = SearchResult::new(2, "second", vec!["https://fresh.example/".to_string()]);
        api.push_gated(stale, gate.clone()).push_result(fresh.clone());
        let page = Arc::new(page_with(&api));
        let mut updates = page.subscribe();

        page.set_query("first");
        let first = tokio::spawn({
            let page = page.clone();
            async move { page.search().await }
        });
        updates.wait_for(|state| state.loading).await.unwrap();

        page.set_query("second");
        assert_eq!(page.search().await, SearchOutcome::Applied);

        gate.notify_one();
        assert_eq!(first.await.unwrap(), SearchOutcome::Superseded);

        let state = page.snapshot();
        assert_eq!(state.search_results, Some(fresh));
        assert!(!state.loading);
        assert_eq!(api.request_count(), 2);
    }

    #[tokio::test]
    async fn test_operations_notify_subscribers() {
        let api = Arc::new(MockSearchApi::new());
        let page = page_with(&api);
        let mut updates = page.subscribe();

        assert_eq!(page.advance_lucky(), LUCKY_QUERIES[0]);
        assert!(updates.has_changed().unwrap());
        assert_eq!(updates.borrow_and_update().query, LUCKY_QUERIES[0]);

        page.clear_query();
        assert!(updates.has_changed().unwrap());
        assert_eq!(updates.borrow_and_update().query, "");
    }

    #[tokio::test]
    async fn test_reset_after_search_returns_to_landing() {
        let api = Arc::new(MockSearchApi::new());
        api.push_result(cats());
        let page = page_with(&api);

        page.set_query("cats");
        page.search().await;
        page.reset();
        page.reset();

        let state = page.snapshot();
        assert_eq!(state.query, "");
        assert!(!state.has_searched);
        assert!(state.search_results.is_none());
    }
}
