//! Device-storage snapshots: named copies of the résumé kept locally.

pub mod handlers;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeDocument;
use crate::models::snapshot::Snapshot;
use crate::resume::backup::file_name_for;
use crate::storage::{self, BlobStore, DEVICE_FILES_BLOB};

pub async fn load_snapshots(store: &dyn BlobStore) -> Result<Vec<Snapshot>, AppError> {
    storage::load_or_default(store, DEVICE_FILES_BLOB)
        .await
        .map_err(AppError::Storage)
}

pub async fn save_snapshots(store: &dyn BlobStore, snapshots: &[Snapshot]) -> Result<(), AppError> {
    storage::save_json(store, DEVICE_FILES_BLOB, &snapshots)
        .await
        .map_err(AppError::Storage)
}

/// Builds a snapshot of `document` named after the contact.
pub fn snapshot_of(document: &ResumeDocument, now: DateTime<Utc>) -> Result<Snapshot, AppError> {
    let fallback = format!("resume_{}.json", now.timestamp_millis());
    let name = file_name_for(&document.data.contact.name, &fallback);
    let size = serde_json::to_vec(document)
        .map_err(|e| AppError::Internal(e.into()))?
        .len();

    Ok(Snapshot {
        id: Uuid::new_v4(),
        name,
        saved_at: now,
        size,
        content: document.clone(),
    })
}

/// Adds `snapshot`, replacing any existing snapshot with the same name.
pub fn insert_snapshot(snapshots: &mut Vec<Snapshot>, snapshot: Snapshot) {
    snapshots.retain(|s| s.name != snapshot.name);
    snapshots.push(snapshot);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn named(name: &str) -> ResumeDocument {
        let mut document = ResumeDocument::default();
        document.data.contact.name = name.to_string();
        document
    }

    #[test]
    fn test_snapshot_named_after_contact() {
        let now = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let snapshot = snapshot_of(&named("Jane Doe"), now).unwrap();
        assert_eq!(snapshot.name, "Jane_Doe_resume.json");
        assert_eq!(snapshot.saved_at, now);
        assert!(snapshot.size > 0);
    }

    #[test]
    fn test_snapshot_without_name_uses_timestamp() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let snapshot = snapshot_of(&ResumeDocument::default(), now).unwrap();
        assert_eq!(snapshot.name, "resume_1700000000123.json");
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let now = Utc::now();
        let mut snapshots = Vec::new();
        insert_snapshot(&mut snapshots, snapshot_of(&named("Jane Doe"), now).unwrap());
        insert_snapshot(&mut snapshots, snapshot_of(&named("John Roe"), now).unwrap());

        let mut newer = named("Jane Doe");
        newer.data.summary = "updated".into();
        insert_snapshot(&mut snapshots, snapshot_of(&newer, now).unwrap());

        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].name, "John_Roe_resume.json");
        assert_eq!(snapshots[1].content.data.summary, "updated");
    }
}
