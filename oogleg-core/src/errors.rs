//! Error types for search requests and configuration.

use thiserror::Error;

/// Errors that can occur while talking to the search API.
///
/// The page treats every variant the same way: the failure is logged and the
/// previously displayed state is kept.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request could not be sent or the response body could not be read.
    #[error("Search request failed for query '{query}': {reason}")]
    Request {
        /// The query that was being searched
        query: String,
        /// The reason for the failure
        reason: String,
    },

    /// The response body was not a valid search result document.
    #[error("Failed to decode search response for query '{query}': {reason}")]
    Decode {
        /// The query that was being searched
        query: String,
        /// The reason for the decode failure
        reason: String,
    },
}

impl SearchError {
    /// Query the failed request was issued for.
    pub fn query(&self) -> &str {
        match self {
            SearchError::Request { query, .. } | SearchError::Decode { query, .. } => query,
        }
    }
}

/// Errors raised while building configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The search API base URL could not be parsed.
    #[error("Invalid search API URL '{value}': {reason}")]
    InvalidApiUrl {
        /// The rejected value
        value: String,
        /// Parser message
        reason: String,
    },

    /// The HTTP client backing the search API could not be built.
    #[error("HTTP client setup failed: {reason}")]
    HttpClient {
        /// The reason for the failure
        reason: String,
    },

    /// An environment override could not be parsed.
    #[error("Invalid value for {variable}: '{value}'")]
    InvalidEnvironment {
        /// Name of the environment variable
        variable: &'static str,
        /// The rejected value
        value: String,
    },
}
