//! Axum route handlers for autocomplete.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::resume::load_document;
use crate::state::AppState;
use crate::suggestions::history::CATEGORIES;
use crate::suggestions::vocabulary::{suggest_skills, vocabulary, SkillCategory};
use crate::suggestions::{load_history, save_history};

#[derive(Debug, Deserialize)]
pub struct RecordSuggestionRequest {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillSuggestRequest {
    pub category: SkillCategory,
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct SkillSuggestResponse {
    pub suggestions: Vec<String>,
}

fn check_category(category: &str) -> Result<(), AppError> {
    if CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(AppError::NotFound(format!(
            "Unknown suggestion category '{category}'"
        )))
    }
}

/// GET /api/v1/suggestions/:category
pub async fn handle_get_suggestions(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<String>>, AppError> {
    check_category(&category)?;
    let history = load_history(state.store.as_ref()).await?;
    Ok(Json(history.get(&category).to_vec()))
}

/// POST /api/v1/suggestions/:category
pub async fn handle_record_suggestion(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(req): Json<RecordSuggestionRequest>,
) -> Result<Json<Vec<String>>, AppError> {
    let _writes = state.lock_writes().await;
    check_category(&category)?;
    let store = state.store.as_ref();
    let mut history = load_history(store).await?;
    if history.record(&category, &req.value) {
        save_history(store, &history).await?;
        debug!("Remembered '{}' under {category}", req.value);
    }
    Ok(Json(history.get(&category).to_vec()))
}

/// POST /api/v1/skills/suggest
///
/// Skills already on the saved résumé (any category) are left out.
pub async fn handle_suggest_skills(
    State(state): State<AppState>,
    Json(req): Json<SkillSuggestRequest>,
) -> Result<Json<SkillSuggestResponse>, AppError> {
    let document = load_document(state.store.as_ref()).await?;
    let existing: Vec<String> = document.data.skills.all().cloned().collect();
    let vocab = vocabulary(req.category, &req.job_description);

    Ok(Json(SkillSuggestResponse {
        suggestions: suggest_skills(&vocab, &existing, &req.input),
    }))
}
