//! Search Worker Thread
//!
//! Runs search requests on a background thread so the UI never blocks on
//! the network. Requests arrive over a channel; each one is spawned as its
//! own task on a current-thread tokio runtime, so several may be in flight
//! at once and complete in any order. Every response carries the id of the
//! request that produced it, which is how the widget drops stale results.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::error::{AppError, SearchError};
use crate::search::SearchBackend;
use crate::suggestion::SuggestionItem;

/// A debounced query ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    /// Monotonic sequence number, used to filter stale responses
    pub request_id: u64,
}

/// Outcome of one request, tagged with the request's id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResponse {
    pub request_id: u64,
    pub query: String,
    pub outcome: Result<Vec<SuggestionItem>, SearchError>,
}

/// Spawn the search worker thread
///
/// The thread exits once every `request_rx` sender has been dropped. Tasks
/// still in flight at that point are dropped with the runtime.
pub fn spawn_worker<B: SearchBackend>(
    backend: B,
    request_rx: UnboundedReceiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) -> Result<JoinHandle<()>, AppError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let handle = std::thread::Builder::new()
        .name("search-worker".to_string())
        .spawn(move || {
            runtime.block_on(worker_loop(Arc::new(backend), request_rx, response_tx));
        })?;

    Ok(handle)
}

/// Main worker loop - dispatches requests until the channel is closed
async fn worker_loop<B: SearchBackend>(
    backend: Arc<B>,
    mut request_rx: UnboundedReceiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    while let Some(request) = request_rx.recv().await {
        log::debug!(
            "Dispatching search {} for {:?}",
            request.request_id,
            request.query
        );

        let backend = Arc::clone(&backend);
        let response_tx = response_tx.clone();
        tokio::spawn(async move {
            let outcome = backend.search(&request.query).await;
            let response = SearchResponse {
                request_id: request.request_id,
                query: request.query,
                outcome,
            };
            if response_tx.send(response).is_err() {
                log::debug!("UI disconnected, dropping search response");
            }
        });
    }

    log::debug!("Search worker shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
