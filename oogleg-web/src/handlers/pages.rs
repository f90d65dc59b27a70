//! Page handlers for full document loads

use axum::extract::{Path, State};
use axum::response::Html;
use uuid::Uuid;

use crate::errors::WebError;
use crate::pages::render_document;
use crate::server::AppState;

/// Opens a new page session and renders its landing layout.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let (session, page) = state.sessions.create();
    render_document(session, &page.view())
}

/// Re-renders an existing session, e.g. after a browser reload.
///
/// # Errors
/// - `WebError::SessionNotFound` - Unknown session
pub async fn session_page(
    State(state): State<AppState>,
    Path(session): Path<Uuid>,
) -> Result<Html<String>, WebError> {
    let page = state.sessions.get(session)?;
    Ok(render_document(session, &page.view()))
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
