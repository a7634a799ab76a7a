//! Blocking HTTP client for the search collaborator.
//!
//! The collaborator exposes a single operation: `POST /search` with a JSON
//! body of `{"query": <text>}`, answering with a JSON array of product
//! records. No authentication, retries, or versioning headers are involved.
//! No request timeout is set; the transport default applies.

use reqwest::Url;
use reqwest::blocking::Client;
use serde_json::json;

use crate::error::SearchError;
use crate::model::ResultItem;

/// Path of the single search operation on the collaborator.
const SEARCH_PATH: &str = "/search";

/// Thin wrapper around the one outbound wire call.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    endpoint: Url,
}

impl SearchClient {
    /// Build a client for the collaborator at the given origin.
    pub fn new(origin: Url) -> Result<Self, SearchError> {
        let user_agent = format!("shopfind/{}", env!("CARGO_PKG_VERSION"));
        let http = Client::builder().user_agent(user_agent).build()?;
        let mut endpoint = origin;
        endpoint.set_path(SEARCH_PATH);
        Ok(Self { http, endpoint })
    }

    /// The full URL requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Issue one search request and decode the response.
    ///
    /// A non-2xx status, a transport failure, and an undecodable body are all
    /// errors; a 2xx answer with a `null` or empty body is an empty result
    /// list, not an error.
    pub fn search(&self, query: &str) -> Result<Vec<ResultItem>, SearchError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&json!({ "query": query }))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }

        let body = response.text()?;
        decode_results(&body)
    }
}

fn decode_results(body: &str) -> Result<Vec<ResultItem>, SearchError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let items: Option<Vec<ResultItem>> = serde_json::from_str(body)?;
    Ok(items.unwrap_or_default())
}
