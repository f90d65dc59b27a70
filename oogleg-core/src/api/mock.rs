//! Scripted search API for tests.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;

use super::SearchApi;
use crate::errors::SearchError;
use crate::types::SearchResult;

#[derive(Debug)]
struct MockReply {
    outcome: Result<SearchResult, String>,
    gate: Option<Arc<Notify>>,
}

/// Mock search API that replays scripted replies in order.
///
/// Every query is recorded. Once the script runs out, each query is answered
/// with an empty result set echoing the query.
#[derive(Debug, Default)]
pub struct MockSearchApi {
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<String>>,
}

impl MockSearchApi {
    /// Creates a mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn push_result(&self, result: SearchResult) -> &Self {
        self.push(Ok(result), None)
    }

    /// Queues a failed reply.
    pub fn push_failure(&self, reason: &str) -> &Self {
        self.push(Err(reason.to_string()), None)
    }

    /// Queues a successful reply that is held back until `gate` is notified.
    pub fn push_gated(&self, result: SearchResult, gate: Arc<Notify>) -> &Self {
        self.push(Ok(result), Some(gate))
    }

    /// Queries received so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    /// Number of queries received so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    fn push(&self, outcome: Result<SearchResult, String>, gate: Option<Arc<Notify>>) -> &Self {
        self.replies.lock().push_back(MockReply { outcome, gate });
        self
    }
}

#[async_trait]
impl SearchApi for MockSearchApi {
    async fn search(&self, query: &str) -> Result<SearchResult, SearchError> {
        self.requests.lock().push(query.to_string());
        let reply = self.replies.lock().pop_front();

        let Some(reply) = reply else {
            return Ok(SearchResult::empty(query));
        };

        if let Some(gate) = reply.gate {
            gate.notified().await;
        }

        reply.outcome.map_err(|reason| SearchError::Request {
            query: query.to_string(),
            reason,
        })
    }
}
