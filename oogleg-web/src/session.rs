//! Page sessions: one `SearchPage` per browser tab.
//!
//! The store is bounded. Opening a session beyond capacity drops the least
//! recently used one; its tab then gets the "expired" page on its next event.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use oogleg_core::{SearchApi, SearchPage};
use parking_lot::Mutex;
use uuid::Uuid;

use crate::errors::WebError;

/// Registry of live page sessions sharing one search API client.
#[derive(Debug, Clone)]
pub struct SessionStore {
    api: Arc<dyn SearchApi>,
    pages: Arc<Mutex<LruCache<Uuid, Arc<SearchPage>>>>,
}

impl SessionStore {
    /// Creates an empty store keeping at most `capacity` pages.
    ///
    /// A capacity of zero is treated as one.
    pub fn new(api: Arc<dyn SearchApi>, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            api,
            pages: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    /// Opens a new page in the landing state.
    pub fn create(&self) -> (Uuid, Arc<SearchPage>) {
        let id = Uuid::new_v4();
        let page = Arc::new(SearchPage::new(self.api.clone()));

        let evicted = self.pages.lock().push(id, page.clone());
        tracing::debug!(session = %id, "Opened page session");
        if let Some((evicted_id, _)) = evicted {
            tracing::debug!(session = %evicted_id, "Dropped least recently used page session");
        }

        (id, page)
    }

    /// Looks up an existing page and marks it as recently used.
    ///
    /// # Errors
    /// - `WebError::SessionNotFound` - No page with this id, or it was dropped
    pub fn get(&self, id: Uuid) -> Result<Arc<SearchPage>, WebError> {
        self.pages
            .lock()
            .get(&id)
            .cloned()
            .ok_or(WebError::SessionNotFound { id })
    }

    /// Number of open pages.
    pub fn len(&self) -> usize {
        self.pages.lock().len()
    }

    /// Whether no page has been opened.
    pub fn is_empty(&self) -> bool {
        self.pages.lock().is_empty()
    }

    /// Most pages kept at once.
    pub fn capacity(&self) -> usize {
        self.pages.lock().cap().get()
    }
}

#[cfg(test)]
mod tests {
    use oogleg_core::api::MockSearchApi;

    use super::*;

    fn store(capacity: usize) -> SessionStore {
        SessionStore::new(Arc::new(MockSearchApi::new()), capacity)
    }

    #[test]
    fn test_sessions_are_independent() {
        let store = store(8);
        let (first_id, first) = store.create();
        let (second_id, _) = store.create();

        first.set_query("cats");

        assert_ne!(first_id, second_id);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(first_id).unwrap().snapshot().query, "cats");
        assert_eq!(store.get(second_id).unwrap().snapshot().query, "");
    }

    #[test]
    fn test_unknown_session() {
        let store = store(8);
        assert!(store.is_empty());
        assert!(matches!(
            store.get(Uuid::new_v4()),
            Err(WebError::SessionNotFound { .. })
        ));
    }

    #[test]
    fn test_store_stays_at_capacity() {
        let store = store(3);
        for _ in 0..100 {
            store.create();
        }
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_least_recently_used_session_is_dropped() {
        let store = store(2);
        let (oldest, _) = store.create();
        let (touched, _) = store.create();

        // Touching `oldest` makes `touched` the eviction candidate.
        store.get(oldest).unwrap();
        store.create();

        assert!(store.get(oldest).is_ok());
        assert!(matches!(
            store.get(touched),
            Err(WebError::SessionNotFound { .. })
        ));
    }

    #[test]
    fn test_zero_capacity_keeps_one_session() {
        let store = store(0);
        assert_eq!(store.capacity(), 1);
        let (_, _) = store.create();
        let (latest, _) = store.create();
        assert_eq!(store.len(), 1);
        assert!(store.get(latest).is_ok());
    }
}
