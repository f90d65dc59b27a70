//! Reusable HTML components for the HTMX + Tailwind search page
//!
//! Components are server-rendered HTML fragments used both in the full
//! document and as HTMX swaps. All user and API supplied text is escaped.

pub mod layout;
pub mod results;

pub use layout::{brand, brand_mark, button, clear_button, search_form};
pub use results::{result_entry, results_body};
