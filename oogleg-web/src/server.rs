//! HTMX + Tailwind web host for the search page
//!
//! Every browser tab gets its own page session. Events post back to the
//! session and receive server-rendered HTML to swap in.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use oogleg_core::SearchApi;
use oogleg_core::config::WebConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::errors::WebError;
use crate::handlers::{clear, health, index, lucky, reset, search, session_page, update_query};
use crate::session::SessionStore;

/// Shared state of the web host.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Open page sessions
    pub sessions: SessionStore,
}

impl AppState {
    /// State whose pages search through `api`, with the default session cap.
    pub fn new(api: Arc<dyn SearchApi>) -> Self {
        Self::with_max_sessions(api, WebConfig::default().max_sessions)
    }

    /// State keeping at most `max_sessions` pages open.
    pub fn with_max_sessions(api: Arc<dyn SearchApi>, max_sessions: usize) -> Self {
        Self {
            sessions: SessionStore::new(api, max_sessions),
        }
    }
}

/// Routes of the search page host.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/session/{session}", get(session_page))
        .route("/session/{session}/query", post(update_query))
        .route("/session/{session}/search", post(search))
        .route("/session/{session}/lucky", post(lucky))
        .route("/session/{session}/clear", post(clear))
        .route("/session/{session}/reset", post(reset))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds `config.host:config.port` and serves the search page.
///
/// With `with_demo_api` the demo search API is mounted on the same server.
///
/// # Errors
/// - `WebError::Bind` - The address could not be bound
/// - `WebError::Serve` - The server stopped with an I/O error
pub async fn run_server(
    config: &WebConfig,
    api: Arc<dyn SearchApi>,
    with_demo_api: bool,
) -> Result<(), WebError> {
    let mut app = router(AppState::with_max_sessions(api, config.max_sessions));
    if with_demo_api {
        app = app.merge(crate::demo::router());
    }

    let listener = bind(config).await?;
    tracing::info!(
        "Search page running on http://{}:{}",
        config.host,
        config.port
    );
    serve(listener, app).await
}

/// Binds `config.host:config.port` and serves only the demo search API.
///
/// # Errors
/// - `WebError::Bind` - The address could not be bound
/// - `WebError::Serve` - The server stopped with an I/O error
pub async fn run_demo_api(config: &WebConfig) -> Result<(), WebError> {
    let listener = bind(config).await?;
    tracing::info!(
        "Demo search API running on http://{}:{}/api/search",
        config.host,
        config.port
    );
    serve(listener, crate::demo::router()).await
}

/// Serves `app` on an already bound listener until the process stops.
///
/// # Errors
/// - `WebError::Serve` - The server stopped with an I/O error
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), WebError> {
    axum::serve(listener, app)
        .await
        .map_err(|e| WebError::Serve {
            reason: e.to_string(),
        })
}

async fn bind(config: &WebConfig) -> Result<TcpListener, WebError> {
    let address = format!("{}:{}", config.host, config.port);
    TcpListener::bind(&address)
        .await
        .map_err(|e| WebError::Bind {
            address,
            reason: e.to_string(),
        })
}
