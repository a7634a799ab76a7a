use reqwest::StatusCode;
use thiserror::Error;

/// The only message shown to the user when a search fails. The concrete
/// error is written to the diagnostic log instead.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch results.";

/// Failure modes of the one outbound call to the search collaborator.
///
/// All variants collapse to [`FETCH_FAILED_MESSAGE`] at the submission
/// boundary; the distinction only matters for logging and tests.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The collaborator answered with a non-2xx status.
    #[error("search endpoint returned HTTP {0}")]
    Status(StatusCode),
    /// The request never completed: connection refused, DNS failure, or the
    /// body could not be read.
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The collaborator answered 2xx but the body was not valid JSON.
    #[error("search response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}
