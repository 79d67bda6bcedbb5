//! Autocomplete support: remembered input values and skill vocabularies.

pub mod handlers;
pub mod history;
pub mod vocabulary;

use crate::errors::AppError;
use crate::storage::{self, BlobStore, SUGGESTIONS_BLOB};

pub use history::SuggestionHistory;

pub async fn load_history(store: &dyn BlobStore) -> Result<SuggestionHistory, AppError> {
    storage::load_or_default(store, SUGGESTIONS_BLOB)
        .await
        .map_err(AppError::Storage)
}

pub async fn save_history(
    store: &dyn BlobStore,
    history: &SuggestionHistory,
) -> Result<(), AppError> {
    storage::save_json(store, SUGGESTIONS_BLOB, history)
        .await
        .map_err(AppError::Storage)
}
