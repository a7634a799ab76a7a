//! Core state container for the terminal front-end.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use ratatui::widgets::ListState;
use throbber_widgets_tui::ThrobberState;

use super::input::SearchInput;
use super::theme::Theme;
use crate::client::SearchClient;
use crate::error::FETCH_FAILED_MESSAGE;
use crate::model::ResultItem;
use crate::search::{self, SearchCommand, SearchResponse};

/// Explicit request lifecycle.
///
/// The tagged form makes impossible combinations unrepresentable: there is
/// no way to be loading while still holding a stale error, and results only
/// exist in the `Success` arm.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(Vec<ResultItem>),
    Failed(String),
}

impl RequestState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The current result list; empty outside of `Success`.
    #[must_use]
    pub fn results(&self) -> &[ResultItem] {
        match self {
            Self::Success(items) => items,
            _ => &[],
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.search_tx.send(SearchCommand::Shutdown);
    }
}

/// Aggregate state for the search view.
pub struct App {
    /// Text input widget for the query.
    pub search_input: SearchInput,
    /// Where the current (or last) request stands.
    pub request: RequestState,
    /// Selection state for the card list.
    pub list_state: ListState,
    pub input_title: Option<String>,
    pub theme: Theme,
    pub(crate) throbber_state: ThrobberState,
    search_tx: Sender<SearchCommand>,
    search_rx: Receiver<SearchResponse>,
    latest_query_id: Arc<AtomicU64>,
    next_query_id: u64,
    current_query_id: Option<u64>,
}

impl App {
    pub fn new(client: SearchClient) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        let (search_tx, search_rx, latest_query_id) = search::spawn(client);

        Self {
            search_input: SearchInput::default(),
            request: RequestState::Idle,
            list_state,
            input_title: None,
            theme: Theme::default(),
            throbber_state: ThrobberState::default(),
            search_tx,
            search_rx,
            latest_query_id,
            next_query_id: 0,
            current_query_id: None,
        }
    }

    /// Send the current query to the worker, superseding any in-flight
    /// request. Empty queries are ignored here, the same place the original
    /// form control blocked them.
    pub fn submit(&mut self) {
        let query = self.search_input.text().trim().to_string();
        if query.is_empty() {
            return;
        }

        self.next_query_id += 1;
        let id = self.next_query_id;
        self.current_query_id = Some(id);
        self.latest_query_id.store(id, AtomicOrdering::Release);

        // Previous error and result list are dropped before the request goes
        // out; the spec requires a clean slate per submission.
        self.request = RequestState::Loading;
        self.list_state.select(Some(0));

        let _ = self.search_tx.send(SearchCommand::Query { id, query });
    }

    /// Drain worker responses, applying only the latest generation.
    pub fn pump_search_responses(&mut self) {
        loop {
            match self.search_rx.try_recv() {
                Ok(response) => self.apply_response(response),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    fn apply_response(&mut self, response: SearchResponse) {
        if Some(response.id) != self.current_query_id {
            return;
        }
        self.current_query_id = None;
        self.request = match response.outcome {
            Ok(items) => RequestState::Success(items),
            Err(_) => RequestState::Failed(FETCH_FAILED_MESSAGE.to_string()),
        };
    }

    /// Final query and result list reported on exit.
    #[must_use]
    pub fn outcome(&self) -> super::SearchOutcome {
        super::SearchOutcome {
            query: self.search_input.text().to_string(),
            results: self.request.results().to_vec(),
        }
    }

    pub(crate) fn move_selection_up(&mut self) {
        let selected = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some(selected.saturating_sub(1)));
    }

    pub(crate) fn move_selection_down(&mut self) {
        let len = self.request.results().len();
        if len == 0 {
            return;
        }
        let selected = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((selected + 1).min(len - 1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Url;
    use serde_json::json;
    use std::time::{Duration, Instant};

    fn app_for(server: &mockito::ServerGuard) -> App {
        let origin = Url::parse(&server.url()).unwrap();
        App::new(SearchClient::new(origin).unwrap())
    }

    fn pump_until_settled(app: &mut App) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.request.is_loading() {
            assert!(Instant::now() < deadline, "request never settled");
            app.pump_search_responses();
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn empty_submission_is_ignored() {
        let server = mockito::Server::new();
        let mut app = app_for(&server);
        app.submit();
        assert_eq!(app.request, RequestState::Idle);

        app.search_input = SearchInput::new("   ");
        app.submit();
        assert_eq!(app.request, RequestState::Idle);
    }

    #[test]
    fn loading_holds_strictly_between_submit_and_settlement() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/search")
            .with_status(200)
            .with_body("[]")
            .create();

        let mut app = app_for(&server);
        assert!(!app.request.is_loading());

        app.search_input = SearchInput::new("shoes");
        app.submit();
        assert!(app.request.is_loading());

        pump_until_settled(&mut app);
        assert_eq!(app.request, RequestState::Success(Vec::new()));
    }

    #[test]
    fn loading_ends_on_failure_too() {
        let mut server = mockito::Server::new();
        server.mock("POST", "/search").with_status(503).create();

        let mut app = app_for(&server);
        app.search_input = SearchInput::new("shoes");
        app.submit();
        assert!(app.request.is_loading());

        pump_until_settled(&mut app);
        assert_eq!(
            app.request,
            RequestState::Failed(FETCH_FAILED_MESSAGE.to_string())
        );
        assert!(app.request.results().is_empty());
    }

    #[test]
    fn submission_clears_previous_error_and_results() {
        let mut server = mockito::Server::new();
        server.mock("POST", "/search").with_status(500).create();

        let mut app = app_for(&server);
        app.search_input = SearchInput::new("first");
        app.submit();
        pump_until_settled(&mut app);
        assert!(app.request.error().is_some());

        app.search_input = SearchInput::new("second");
        app.submit();
        assert!(app.request.error().is_none());
        assert!(app.request.results().is_empty());
    }

    #[test]
    fn success_replaces_the_result_list_wholesale() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/search")
            .with_status(200)
            .with_body(
                json!([
                    {"title": "One", "brand": "a", "category": "c"},
                    {"title": "Two", "brand": "b", "category": "c"}
                ])
                .to_string(),
            )
            .create();

        let mut app = app_for(&server);
        app.search_input = SearchInput::new("anything");
        app.submit();
        pump_until_settled(&mut app);

        let titles: Vec<&str> = app
            .request
            .results()
            .iter()
            .map(|item| item.title.as_str())
            .collect();
        assert_eq!(titles, ["One", "Two"]);
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/search")
            .with_status(200)
            .with_body("[]")
            .create();

        let mut app = app_for(&server);
        app.search_input = SearchInput::new("anything");
        app.submit();
        let stale = SearchResponse {
            id: 0,
            outcome: Ok(vec![ResultItem::default()]),
        };
        app.apply_response(stale);
        assert!(app.request.is_loading(), "stale response must not settle");

        pump_until_settled(&mut app);
        assert_eq!(app.request, RequestState::Success(Vec::new()));
    }

    #[test]
    fn outcome_reports_query_and_results() {
        let server = mockito::Server::new();
        let mut app = app_for(&server);
        app.search_input = SearchInput::new("boots");
        let outcome = app.outcome();
        assert_eq!(outcome.query, "boots");
        assert!(outcome.results.is_empty());
    }
}
