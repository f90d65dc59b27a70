//! Oogleg Web - HTMX search page host and demo search API

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Hosts one search page per browser session, rendering the page on the
//! server and updating it through HTMX events. Also provides a demo
//! implementation of the search API for local use.

pub mod components;
pub mod demo;
pub mod errors;
pub mod handlers;
pub mod pages;
pub mod server;
pub mod session;

// Re-export main types
pub use errors::WebError;
pub use server::{AppState, router, run_demo_api, run_server, serve};
pub use session::SessionStore;
