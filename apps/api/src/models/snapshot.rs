use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::resume::ResumeDocument;

/// A named copy of the résumé kept in local device storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub id: Uuid,
    pub name: String,
    pub saved_at: DateTime<Utc>,
    /// Length in bytes of the serialized content.
    pub size: usize,
    pub content: ResumeDocument,
}

/// Listing view without the document body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotSummary {
    pub id: Uuid,
    pub name: String,
    pub saved_at: DateTime<Utc>,
    pub size: usize,
}

impl From<&Snapshot> for SnapshotSummary {
    fn from(s: &Snapshot) -> Self {
        Self {
            id: s.id,
            name: s.name.clone(),
            saved_at: s.saved_at,
            size: s.size,
        }
    }
}
