use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::ats::MatchScorer;
use crate::storage::BlobStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Named JSON blobs: the résumé, cover letters, snapshots and autocomplete history.
    pub store: Arc<dyn BlobStore>,
    /// Pluggable match scorer. Default: KeywordMatchScorer.
    pub match_scorer: Arc<dyn MatchScorer>,
    /// Held across every load → modify → save of a blob.
    writes: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(store: Arc<dyn BlobStore>, match_scorer: Arc<dyn MatchScorer>) -> Self {
        Self {
            store,
            match_scorer,
            writes: Arc::new(Mutex::new(())),
        }
    }

    /// Serializes blob updates so concurrent requests never drop each other's changes.
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.writes.lock().await
    }
}
