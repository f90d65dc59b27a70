//! HTMX handlers for page events
//!
//! Each handler applies one page operation to the session named in the path
//! and returns the HTML fragment HTMX swaps in: the clear affordance for
//! keystrokes, the whole `#page` body for everything else.

use axum::extract::{Form, Path, State};
use axum::response::Html;
use serde::Deserialize;
use uuid::Uuid;

use crate::components::clear_button;
use crate::errors::WebError;
use crate::pages::render_body;
use crate::server::AppState;

/// Form data carrying the search box contents.
#[derive(Debug, Deserialize)]
pub struct QueryForm {
    /// Current text of the search box
    #[serde(default)]
    pub query: String,
}

/// Keystroke in the search box.
///
/// # Errors
/// - `WebError::SessionNotFound` - Unknown session
pub async fn update_query(
    State(state): State<AppState>,
    Path(session): Path<Uuid>,
    Form(form): Form<QueryForm>,
) -> Result<Html<String>, WebError> {
    let page = state.sessions.get(session)?;
    page.set_query(form.query);
    Ok(Html(clear_button(session, page.snapshot().shows_clear())))
}

/// Enter in the search box or a "Search" click.
///
/// The submitted text is applied first so a search never runs on a stale
/// query if a keystroke event was lost.
///
/// # Errors
/// - `WebError::SessionNotFound` - Unknown session
pub async fn search(
    State(state): State<AppState>,
    Path(session): Path<Uuid>,
    Form(form): Form<QueryForm>,
) -> Result<Html<String>, WebError> {
    let page = state.sessions.get(session)?;
    page.set_query(form.query);

    let outcome = page.search().await;
    tracing::debug!(%session, ?outcome, "Handled search event");

    Ok(Html(render_body(session, &page.view())))
}

/// "I'm Feeling Lucky" click.
///
/// # Errors
/// - `WebError::SessionNotFound` - Unknown session
pub async fn lucky(
    State(state): State<AppState>,
    Path(session): Path<Uuid>,
) -> Result<Html<String>, WebError> {
    let page = state.sessions.get(session)?;
    page.advance_lucky();
    Ok(Html(render_body(session, &page.view())))
}

/// "×" click.
///
/// # Errors
/// - `WebError::SessionNotFound` - Unknown session
pub async fn clear(
    State(state): State<AppState>,
    Path(session): Path<Uuid>,
) -> Result<Html<String>, WebError> {
    let page = state.sessions.get(session)?;
    page.clear_query();
    Ok(Html(render_body(session, &page.view())))
}

/// Brand mark click in the results header.
///
/// # Errors
/// - `WebError::SessionNotFound` - Unknown session
pub async fn reset(
    State(state): State<AppState>,
    Path(session): Path<Uuid>,
) -> Result<Html<String>, WebError> {
    let page = state.sessions.get(session)?;
    page.reset();
    Ok(Html(render_body(session, &page.view())))
}
