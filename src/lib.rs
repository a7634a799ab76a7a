//! Core crate exports for the `shopfind` terminal search client.
//!
//! The root module re-exports the pieces an embedder needs to run a search
//! session: the HTTP client for the collaborator, the result record it
//! returns, and the interactive UI wrapper.

pub mod app_dirs;
pub mod client;
pub mod error;
pub mod logging;
pub mod model;
mod search;
pub mod ui;

pub use client::SearchClient;
pub use error::{FETCH_FAILED_MESSAGE, SearchError};
pub use model::ResultItem;
pub use ui::{SearchOutcome, SearchUi};
pub use ui::theme::{Theme, default_theme};
