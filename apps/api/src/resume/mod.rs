// Résumé document: persistence, contact validation, and export formats.

pub mod backup;
pub mod dates;
pub mod handlers;
pub mod plain_text;
pub mod validation;

use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::storage::{self, BlobStore, RESUME_BLOB};

/// Current saved document, or a fresh default one.
pub async fn load_document(store: &dyn BlobStore) -> Result<ResumeDocument, AppError> {
    Ok(storage::load_json(store, RESUME_BLOB)
        .await
        .map_err(AppError::Storage)?
        .unwrap_or_default())
}

pub async fn save_document(store: &dyn BlobStore, document: &ResumeDocument) -> Result<(), AppError> {
    storage::save_json(store, RESUME_BLOB, document)
        .await
        .map_err(AppError::Storage)
}
