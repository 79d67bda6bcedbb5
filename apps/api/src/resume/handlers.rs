//! Axum route handlers for the résumé document.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cover_letters::{load_cover_letters, save_cover_letters};
use crate::errors::AppError;
use crate::models::resume::{has_meaningful_data, Contact, ResumeDocument};
use crate::resume::backup::{apply_backup, backup_file_name, Backup};
use crate::resume::dates::normalize_dates;
use crate::resume::plain_text::render_plain_text;
use crate::resume::validation::{validate_contact, ContactErrors};
use crate::resume::{load_document, save_document};
use crate::state::AppState;
use crate::storage::RESUME_BLOB;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    pub document: ResumeDocument,
    /// Whether the stored document is worth offering to continue.
    pub has_meaningful_data: bool,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateContactRequest {
    #[serde(default)]
    pub contact: Contact,
}

#[derive(Debug, Serialize)]
pub struct ValidateContactResponse {
    pub valid: bool,
    pub errors: ContactErrors,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/resume
pub async fn handle_get_document(
    State(state): State<AppState>,
) -> Result<Json<DocumentResponse>, AppError> {
    let document = load_document(state.store.as_ref()).await?;
    let has_meaningful_data = has_meaningful_data(&document.data);
    Ok(Json(DocumentResponse {
        document,
        has_meaningful_data,
    }))
}

/// PUT /api/v1/resume
///
/// Autosave target; the wizard calls this after every edit. Typed dates such
/// as `March 2021` are stored as `2021-03`.
pub async fn handle_put_document(
    State(state): State<AppState>,
    Json(mut document): Json<ResumeDocument>,
) -> Result<Json<SaveResponse>, AppError> {
    normalize_dates(&mut document.data);
    let _writes = state.lock_writes().await;
    save_document(state.store.as_ref(), &document).await?;
    Ok(Json(SaveResponse {
        saved_at: Utc::now(),
    }))
}

/// DELETE /api/v1/resume
///
/// "Start fresh": drops the saved document. Cover letters and snapshots stay.
pub async fn handle_delete_document(
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let _writes = state.lock_writes().await;
    state
        .store
        .delete(RESUME_BLOB)
        .await
        .map_err(AppError::Storage)?;
    info!("Cleared saved résumé document");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/resume/validate-contact
pub async fn handle_validate_contact(
    Json(request): Json<ValidateContactRequest>,
) -> Json<ValidateContactResponse> {
    let errors = validate_contact(&request.contact);
    Json(ValidateContactResponse {
        valid: errors.is_empty(),
        errors,
    })
}

/// GET /api/v1/resume/export/text
pub async fn handle_export_text(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let document = load_document(state.store.as_ref()).await?;
    let text = render_plain_text(&document.sections, &document.data);
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    ))
}

/// GET /api/v1/resume/export/backup
///
/// Full JSON backup (sections, data, cover letters) as a download.
pub async fn handle_export_backup(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let document = load_document(state.store.as_ref()).await?;
    let letters = load_cover_letters(state.store.as_ref()).await?;
    let backup = Backup::from_state(&document, &letters)?;

    let body = serde_json::to_string_pretty(&backup).map_err(|e| AppError::Internal(e.into()))?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        backup_file_name(&document.data)
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

/// POST /api/v1/resume/import
pub async fn handle_import_backup(
    State(state): State<AppState>,
    Json(backup): Json<Backup>,
) -> Result<Json<DocumentResponse>, AppError> {
    let _writes = state.lock_writes().await;
    let store = state.store.as_ref();
    let mut document = load_document(store).await?;
    let mut letters = load_cover_letters(store).await?;
    let replaces_letters = backup.cover_letters.is_some();

    apply_backup(&mut document, &mut letters, backup)?;
    normalize_dates(&mut document.data);

    save_document(store, &document).await?;
    if replaces_letters {
        save_cover_letters(store, &letters).await?;
    }
    info!(
        cover_letters = letters.len(),
        "Imported résumé backup"
    );

    let has_meaningful_data = has_meaningful_data(&document.data);
    Ok(Json(DocumentResponse {
        document,
        has_meaningful_data,
    }))
}
