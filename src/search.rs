//! Background worker owning the blocking HTTP call.
//!
//! The UI thread never blocks on the network: it sends [`SearchCommand`]s to
//! a dedicated thread and drains [`SearchResponse`]s from a channel on every
//! tick. Each submission carries a generation id; the shared latest-id cell
//! lets the worker abort delivery of superseded responses so that rapid
//! re-submission settles on the last request rather than the last response.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, warn};

use crate::client::SearchClient;
use crate::error::SearchError;
use crate::model::ResultItem;

#[derive(Debug)]
pub(crate) enum SearchCommand {
    Query { id: u64, query: String },
    Shutdown,
}

#[derive(Debug)]
pub(crate) struct SearchResponse {
    pub(crate) id: u64,
    pub(crate) outcome: Result<Vec<ResultItem>, SearchError>,
}

/// Spawn the worker thread for the given client.
///
/// Returns the command sender, the response receiver, and the shared cell
/// holding the id of the most recent submission.
pub(crate) fn spawn(
    client: SearchClient,
) -> (
    Sender<SearchCommand>,
    Receiver<SearchResponse>,
    Arc<AtomicU64>,
) {
    let (command_tx, command_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let latest_query_id = Arc::new(AtomicU64::new(0));
    let thread_latest = Arc::clone(&latest_query_id);

    thread::spawn(move || {
        while let Ok(command) = command_rx.recv() {
            match command {
                SearchCommand::Query { id, query } => {
                    if !process_query(&client, id, &query, &response_tx, &thread_latest) {
                        break;
                    }
                }
                SearchCommand::Shutdown => break,
            }
        }
    });

    (command_tx, response_rx, latest_query_id)
}

fn should_abort(id: u64, latest_query_id: &AtomicU64) -> bool {
    latest_query_id.load(AtomicOrdering::Acquire) != id
}

/// Run one query against the collaborator. Returns `false` when the UI side
/// has gone away and the worker should exit.
fn process_query(
    client: &SearchClient,
    id: u64,
    query: &str,
    tx: &Sender<SearchResponse>,
    latest_query_id: &AtomicU64,
) -> bool {
    if should_abort(id, latest_query_id) {
        debug!(id, "skipping superseded search request");
        return true;
    }

    debug!(id, query, "issuing search request");
    let outcome = client.search(query);
    match &outcome {
        Ok(items) => debug!(id, count = items.len(), "search request settled"),
        Err(err) => warn!(id, error = %err, "search request failed"),
    }

    if should_abort(id, latest_query_id) {
        debug!(id, "dropping superseded search response");
        return true;
    }

    tx.send(SearchResponse { id, outcome }).is_ok()
}
