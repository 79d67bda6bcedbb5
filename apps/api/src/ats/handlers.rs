//! Axum route handlers for the ATS analyzer.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::ats::scoring::MatchReport;
use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub resume: ResumeRecord,
}

/// POST /api/v1/ats/analyze
///
/// Scores the supplied résumé against a pasted job description. A blank
/// description yields an empty report rather than an error.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<MatchReport>, AppError> {
    let report = state
        .match_scorer
        .analyze(&request.job_description, &request.resume);

    info!(
        score = report.score,
        total = report.total,
        "Analyzed job description against résumé"
    );

    Ok(Json(report))
}
