//! End-to-end tests for Oogleg
//!
//! These tests run real HTTP servers on ephemeral ports: a search API on one
//! side, and the search page (terminal view model or web host) on the other.

mod search_workflow;
mod web_workflow;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use oogleg_core::config::ApiConfig;
use oogleg_core::{HttpSearchApi, SearchPage};
use parking_lot::Mutex;
use serde::Deserialize;
use tokio::net::TcpListener;

/// Canned reply of a scripted search API.
#[derive(Clone)]
pub enum ApiReply {
    /// Given status with a JSON body
    Json(StatusCode, serde_json::Value),
    /// Given status with a plain text body
    Text(StatusCode, &'static str),
}

/// Search API that answers with the current reply and records every query.
#[derive(Clone)]
pub struct ScriptedApi {
    reply: Arc<Mutex<ApiReply>>,
    queries: Arc<Mutex<Vec<String>>>,
}

#[derive(Deserialize)]
struct SearchParams {
    query: String,
}

impl ScriptedApi {
    pub fn new(reply: ApiReply) -> Self {
        Self {
            reply: Arc::new(Mutex::new(reply)),
            queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Changes the reply for subsequent requests.
    pub fn set_reply(&self, reply: ApiReply) {
        *self.reply.lock() = reply;
    }

    /// Decoded `query` parameters received so far.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/search", get(scripted_search))
            .with_state(self.clone())
    }
}

async fn scripted_search(
    State(api): State<ScriptedApi>,
    Query(params): Query<SearchParams>,
) -> Response {
    api.queries.lock().push(params.query);
    let reply = api.reply.lock().clone();
    match reply {
        ApiReply::Json(status, body) => (status, axum::Json(body)).into_response(),
        ApiReply::Text(status, body) => (status, body).into_response(),
    }
}

/// Serves `app` on an ephemeral localhost port.
pub async fn spawn_server(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(oogleg_web::serve(listener, app));
    address
}

/// Search page talking to the API at `address` over HTTP.
pub fn page_for(address: SocketAddr) -> SearchPage {
    let config = ApiConfig::with_base_url(&format!("http://{address}")).unwrap();
    SearchPage::new(Arc::new(HttpSearchApi::new(&config).unwrap()))
}

/// The API response used throughout the end-to-end scenarios.
pub fn cats_response() -> serde_json::Value {
    serde_json::json!({
        "count": 1234,
        "query": "cats",
        "results": ["https://wikipedia.org/wiki/Cat-facts"]
    })
}
