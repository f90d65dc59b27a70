//! HTTP handlers for the web host
//!
//! Organized into full page loads and HTMX event handlers.

pub mod htmx;
pub mod pages;

// Re-export all handler functions
pub use htmx::{clear, lucky, reset, search, update_query};
pub use pages::{health, index, session_page};
