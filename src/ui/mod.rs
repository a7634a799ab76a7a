//! Interactive terminal front-end for the search session.
//!
//! The UI is a single view: a prompt row, a status line, and a scrollable
//! card list. All state transitions happen on the event loop; the HTTP call
//! runs on the worker thread behind [`crate::search`].

mod actions;
pub mod components;
mod input;
mod render;
mod runtime;
mod state;
pub mod theme;

pub use input::SearchInput;
pub use state::{App, RequestState};

use anyhow::Result;

use crate::client::SearchClient;
use crate::model::ResultItem;

/// Final state handed back to the caller when the UI exits.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub query: String,
    pub results: Vec<ResultItem>,
}

/// Builder for an interactive search session.
pub struct SearchUi {
    client: SearchClient,
    input_title: Option<String>,
    initial_query: String,
    theme_name: Option<String>,
}

impl SearchUi {
    #[must_use]
    pub fn new(client: SearchClient) -> Self {
        Self {
            client,
            input_title: None,
            initial_query: String::new(),
            theme_name: None,
        }
    }

    #[must_use]
    pub fn with_input_title(mut self, title: impl Into<String>) -> Self {
        self.input_title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        self.initial_query = query.into();
        self
    }

    /// Select a theme by name. Unknown names keep the default; callers that
    /// want an error should validate against [`theme::by_name`] first.
    #[must_use]
    pub fn with_theme_name(mut self, name: impl Into<String>) -> Self {
        self.theme_name = Some(name.into());
        self
    }

    /// Run the session to completion on the current terminal.
    pub fn run(self) -> Result<SearchOutcome> {
        let mut app = App::new(self.client);
        app.input_title = self.input_title;
        app.search_input = SearchInput::new(self.initial_query);
        if let Some(name) = &self.theme_name
            && let Some(theme) = theme::by_name(name)
        {
            app.theme = theme;
        }
        app.run()
    }
}
