//! Oogleg Core - search page state, search invoker and result formatting
//!
//! This crate holds everything about the search page that does not depend on
//! how it is drawn: the client state and its operations, the client for the
//! remote search API, URL display formatting and the view model that
//! renderers consume.

pub mod api;
pub mod config;
pub mod errors;
pub mod format;
pub mod page;
pub mod state;
pub mod tracing_setup;
pub mod types;
pub mod view;

// Re-export main types for convenient access
pub use api::{HttpSearchApi, SearchApi};
pub use config::OoglegConfig;
pub use errors::{ConfigError, SearchError};
pub use page::{SearchOutcome, SearchPage};
pub use state::{ClientState, LUCKY_QUERIES};
pub use types::SearchResult;
pub use view::{Layout, PageView, ResultEntry, ResultsBody};

pub type Result<T> = std::result::Result<T, SearchError>;
