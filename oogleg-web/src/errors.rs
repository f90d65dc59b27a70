//! Error types for the web host.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while hosting the search page.
#[derive(Debug, Error)]
pub enum WebError {
    /// The listener could not be bound.
    #[error("Failed to bind {address}: {reason}")]
    Bind {
        /// Address that was requested
        address: String,
        /// The reason for the failure
        reason: String,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {reason}")]
    Serve {
        /// The reason for the failure
        reason: String,
    },

    /// An event referenced a page session that does not exist.
    #[error("Unknown page session {id}")]
    SessionNotFound {
        /// The session id from the request path
        id: Uuid,
    },
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::SessionNotFound { .. } => (
                StatusCode::NOT_FOUND,
                Html(
                    r#"<div class="text-center py-12 text-gray-600">This search page has expired. <a class="text-blue-600 hover:underline" href="/">Start a new search</a></div>"#
                        .to_string(),
                ),
            )
                .into_response(),
            other => {
                tracing::error!(error = %other, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()).into_response()
            }
        }
    }
}
