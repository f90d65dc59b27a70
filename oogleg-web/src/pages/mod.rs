//! Full page rendering
//!
//! The search page is the only page. It renders either as a complete HTML
//! document or as the body swapped into `#page` after each event.

pub mod search;

pub use search::{render_body, render_document};
