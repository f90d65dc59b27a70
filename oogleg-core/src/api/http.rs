//! HTTP client for the `/api/search` endpoint.

use async_trait::async_trait;
use tracing::debug;

use super::SearchApi;
use crate::config::ApiConfig;
use crate::errors::{ConfigError, SearchError};
use crate::types::SearchResult;

/// Search API reached over HTTP.
///
/// Sends `GET {base_url}/api/search?query=...` and decodes the JSON body.
/// The status code is not inspected; any body that decodes is accepted.
#[derive(Debug, Clone)]
pub struct HttpSearchApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSearchApi {
    /// Creates a client for the configured API.
    ///
    /// # Errors
    /// - `ConfigError::HttpClient` - The HTTP client could not be initialized
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| ConfigError::HttpClient {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    /// Full request URL for `query`. The query is encoded as-is, untrimmed.
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/api/search?query={}",
            self.base_url,
            urlencoding::encode(query)
        )
    }
}

#[async_trait]
impl SearchApi for HttpSearchApi {
    async fn search(&self, query: &str) -> Result<SearchResult, SearchError> {
        let url = self.search_url(query);
        debug!(%url, "Sending search request");

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| SearchError::Request {
                    query: query.to_string(),
                    reason: e.to_string(),
                })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| SearchError::Request {
            query: query.to_string(),
            reason: e.to_string(),
        })?;
        debug!(%status, bytes = body.len(), "Received search response");

        serde_json::from_str(&body).map_err(|e| SearchError::Decode {
            query: query.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_for(base: &str) -> HttpSearchApi {
        let config = ApiConfig::with_base_url(base).unwrap();
        HttpSearchApi::new(&config).unwrap()
    }

    #[test]
    fn test_search_url_encodes_query() {
        let api = api_for("http://localhost:8080");
        assert_eq!(
            api.search_url("machine learning"),
            "http://localhost:8080/api/search?query=machine%20learning"
        );
        assert_eq!(
            api.search_url("a&b=c"),
            "http://localhost:8080/api/search?query=a%26b%3Dc"
        );
    }

    #[test]
    fn test_search_url_keeps_surrounding_whitespace() {
        let api = api_for("http://localhost:8080/");
        assert_eq!(
            api.search_url(" cats "),
            "http://localhost:8080/api/search?query=%20cats%20"
        );
    }

    #[tokio::test]
    async fn test_unreachable_api_is_request_error() {
        // Port 9 (discard) is not expected to run an HTTP server.
        let api = api_for("http://127.0.0.1:9");
        let error = api.search("cats").await.unwrap_err();

        assert!(matches!(error, SearchError::Request { .. }));
        assert_eq!(error.query(), "cats");
    }
}
