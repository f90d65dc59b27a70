//! Search API clients.

use async_trait::async_trait;

use crate::Result;
use crate::types::SearchResult;

pub mod http;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use http::HttpSearchApi;
#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockSearchApi;

/// Backend that answers search queries.
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait]
pub trait SearchApi: Send + Sync + std::fmt::Debug {
    /// Runs `query` against the backend.
    ///
    /// # Errors
    /// - `SearchError::Request` - The request could not be sent or read
    /// - `SearchError::Decode` - The body was not a search result document
    async fn search(&self, query: &str) -> Result<SearchResult>;
}
