pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::ats::handlers as ats;
use crate::cover_letters::handlers as cover_letters;
use crate::resume::handlers as resume;
use crate::snapshots::handlers as snapshots;
use crate::state::AppState;
use crate::suggestions::handlers as suggestions;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS analyzer
        .route("/api/v1/ats/analyze", post(ats::handle_analyze))
        // Résumé document
        .route(
            "/api/v1/resume",
            get(resume::handle_get_document)
                .put(resume::handle_put_document)
                .delete(resume::handle_delete_document),
        )
        .route(
            "/api/v1/resume/validate-contact",
            post(resume::handle_validate_contact),
        )
        .route("/api/v1/resume/export/text", get(resume::handle_export_text))
        .route(
            "/api/v1/resume/export/backup",
            get(resume::handle_export_backup),
        )
        .route("/api/v1/resume/import", post(resume::handle_import_backup))
        // Autocomplete
        .route(
            "/api/v1/suggestions/:category",
            get(suggestions::handle_get_suggestions).post(suggestions::handle_record_suggestion),
        )
        .route(
            "/api/v1/skills/suggest",
            post(suggestions::handle_suggest_skills),
        )
        // Cover letters
        .route(
            "/api/v1/cover-letters",
            get(cover_letters::handle_list_letters).post(cover_letters::handle_save_letter),
        )
        .route(
            "/api/v1/cover-letters/generate",
            post(cover_letters::handle_generate_letter),
        )
        .route(
            "/api/v1/cover-letters/:id",
            delete(cover_letters::handle_delete_letter),
        )
        // Device-storage snapshots
        .route(
            "/api/v1/snapshots",
            get(snapshots::handle_list_snapshots)
                .post(snapshots::handle_create_snapshot)
                .delete(snapshots::handle_clear_snapshots),
        )
        .route(
            "/api/v1/snapshots/:id",
            get(snapshots::handle_get_snapshot).delete(snapshots::handle_delete_snapshot),
        )
        .route(
            "/api/v1/snapshots/:id/restore",
            post(snapshots::handle_restore_snapshot),
        )
        .with_state(state)
}
