//! Style enforcement tests
//!
//! Scans the production sources of every Oogleg crate for patterns clippy
//! does not reject on its own.
//!
//! - `dead_code_enforcement` - no `#[allow(dead_code)]` outside tests
//! - `panic_free_production` - no `unwrap()`, `expect()` or `panic!` outside tests

#[path = "style/dead_code_enforcement.rs"]
mod dead_code_enforcement;

#[path = "style/panic_free_production.rs"]
mod panic_free_production;

#[path = "style/sources.rs"]
mod sources;
