//! Axum route handlers for device-storage snapshots.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::models::snapshot::{Snapshot, SnapshotSummary};
use crate::resume::{load_document, save_document};
use crate::snapshots::{insert_snapshot, load_snapshots, save_snapshots, snapshot_of};
use crate::state::AppState;
use crate::storage::DEVICE_FILES_BLOB;

/// GET /api/v1/snapshots
pub async fn handle_list_snapshots(
    State(state): State<AppState>,
) -> Result<Json<Vec<SnapshotSummary>>, AppError> {
    let snapshots = load_snapshots(state.store.as_ref()).await?;
    Ok(Json(snapshots.iter().map(SnapshotSummary::from).collect()))
}

/// POST /api/v1/snapshots
///
/// Saves the current document as a snapshot.
pub async fn handle_create_snapshot(
    State(state): State<AppState>,
) -> Result<Json<SnapshotSummary>, AppError> {
    let _writes = state.lock_writes().await;
    let store = state.store.as_ref();
    let document = load_document(store).await?;
    let snapshot = snapshot_of(&document, Utc::now())?;
    let summary = SnapshotSummary::from(&snapshot);

    let mut snapshots = load_snapshots(store).await?;
    insert_snapshot(&mut snapshots, snapshot);
    save_snapshots(store, &snapshots).await?;

    info!("Saved snapshot {}", summary.name);
    Ok(Json(summary))
}

/// GET /api/v1/snapshots/:id
pub async fn handle_get_snapshot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Snapshot>, AppError> {
    let snapshots = load_snapshots(state.store.as_ref()).await?;
    snapshots
        .into_iter()
        .find(|s| s.id == id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Snapshot {id} not found")))
}

/// POST /api/v1/snapshots/:id/restore
///
/// Replaces the current document with the snapshot's, merging section toggles.
pub async fn handle_restore_snapshot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeDocument>, AppError> {
    let _writes = state.lock_writes().await;
    let store = state.store.as_ref();
    let snapshot = load_snapshots(store)
        .await?
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Snapshot {id} not found")))?;

    let mut document = load_document(store).await?;
    document.sections.merge(snapshot.content.sections);
    document.data = snapshot.content.data;
    save_document(store, &document).await?;

    info!("Restored snapshot {}", snapshot.name);
    Ok(Json(document))
}

/// DELETE /api/v1/snapshots/:id
pub async fn handle_delete_snapshot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let _writes = state.lock_writes().await;
    let store = state.store.as_ref();
    let mut snapshots = load_snapshots(store).await?;
    let before = snapshots.len();
    snapshots.retain(|s| s.id != id);
    if snapshots.len() == before {
        return Err(AppError::NotFound(format!("Snapshot {id} not found")));
    }
    save_snapshots(store, &snapshots).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/snapshots
pub async fn handle_clear_snapshots(
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let _writes = state.lock_writes().await;
    state
        .store
        .delete(DEVICE_FILES_BLOB)
        .await
        .map_err(AppError::Storage)?;
    info!("Cleared all snapshots");
    Ok(StatusCode::NO_CONTENT)
}
