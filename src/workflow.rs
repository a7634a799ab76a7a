use anyhow::Result;
use shopfind::{SearchClient, SearchOutcome, SearchUi};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive search session.
pub(crate) struct SearchWorkflow {
    search_ui: SearchUi,
}

impl SearchWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
        let ResolvedConfig {
            endpoint,
            input_title,
            initial_query,
            theme,
        } = config;

        let client = SearchClient::new(endpoint)?;
        let mut search_ui = SearchUi::new(client).with_initial_query(initial_query);
        if let Some(title) = input_title {
            search_ui = search_ui.with_input_title(title);
        }
        if let Some(theme) = theme {
            search_ui = search_ui.with_theme_name(theme);
        }

        Ok(Self { search_ui })
    }

    pub(crate) fn run(self) -> Result<SearchOutcome> {
        self.search_ui.run()
    }
}
