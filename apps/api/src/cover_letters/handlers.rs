//! Axum route handlers for cover letters.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::cover_letters::templates::{draft_name, salutation, CoverLetterTemplate};
use crate::cover_letters::{
    load_cover_letters, remove_letter, save_cover_letters, upsert_letter, CoverLetterDraft,
};
use crate::errors::AppError;
use crate::models::cover_letter::{CoverLetter, JobInfo};
use crate::resume::load_document;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateLetterRequest {
    pub template: CoverLetterTemplate,
    #[serde(default)]
    pub job: JobInfo,
}

#[derive(Debug, Serialize)]
pub struct GenerateLetterResponse {
    pub name: String,
    pub salutation: String,
    pub content: String,
}

/// GET /api/v1/cover-letters
pub async fn handle_list_letters(
    State(state): State<AppState>,
) -> Result<Json<Vec<CoverLetter>>, AppError> {
    Ok(Json(load_cover_letters(state.store.as_ref()).await?))
}

/// POST /api/v1/cover-letters
pub async fn handle_save_letter(
    State(state): State<AppState>,
    Json(draft): Json<CoverLetterDraft>,
) -> Result<Json<CoverLetter>, AppError> {
    let _writes = state.lock_writes().await;
    let store = state.store.as_ref();
    let mut letters = load_cover_letters(store).await?;
    let letter = upsert_letter(&mut letters, draft, Utc::now())?;
    save_cover_letters(store, &letters).await?;

    info!("Saved cover letter {} ({})", letter.id, letter.name);
    Ok(Json(letter))
}

/// DELETE /api/v1/cover-letters/:id
pub async fn handle_delete_letter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let _writes = state.lock_writes().await;
    let store = state.store.as_ref();
    let mut letters = load_cover_letters(store).await?;
    if !remove_letter(&mut letters, id) {
        return Err(AppError::NotFound(format!("Cover letter {id} not found")));
    }
    save_cover_letters(store, &letters).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/cover-letters/generate
///
/// Fills a template from the saved résumé. Nothing is stored; the editor
/// saves the (possibly edited) draft separately.
pub async fn handle_generate_letter(
    State(state): State<AppState>,
    Json(request): Json<GenerateLetterRequest>,
) -> Result<Json<GenerateLetterResponse>, AppError> {
    let document = load_document(state.store.as_ref()).await?;
    Ok(Json(GenerateLetterResponse {
        name: draft_name(&request.job),
        salutation: salutation(&request.job),
        content: request.template.render(&document.data, &request.job),
    }))
}
