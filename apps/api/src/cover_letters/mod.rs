//! Saved cover letters.
//!
//! Letters live in one list blob. Saving a letter whose id already exists
//! replaces it (keeping its creation time) and moves it to the end.

pub mod handlers;
pub mod templates;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::cover_letter::CoverLetter;
use crate::storage::{self, BlobStore, COVER_LETTERS_BLOB};

/// A letter as submitted by the editor. `id` is absent for new letters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoverLetterDraft {
    pub id: Option<Uuid>,
    pub name: String,
    pub company: String,
    pub position: String,
    pub content: String,
}

pub async fn load_cover_letters(store: &dyn BlobStore) -> Result<Vec<CoverLetter>, AppError> {
    storage::load_or_default(store, COVER_LETTERS_BLOB)
        .await
        .map_err(AppError::Storage)
}

pub async fn save_cover_letters(
    store: &dyn BlobStore,
    letters: &[CoverLetter],
) -> Result<(), AppError> {
    storage::save_json(store, COVER_LETTERS_BLOB, &letters)
        .await
        .map_err(AppError::Storage)
}

/// Inserts or replaces `draft` in `letters` and returns the stored letter.
pub fn upsert_letter(
    letters: &mut Vec<CoverLetter>,
    draft: CoverLetterDraft,
    now: DateTime<Utc>,
) -> Result<CoverLetter, AppError> {
    if draft.content.trim().is_empty() {
        return Err(AppError::Validation(
            "Cover letter content cannot be empty".to_string(),
        ));
    }

    let existing = draft
        .id
        .and_then(|id| letters.iter().position(|l| l.id == id))
        .map(|idx| letters.remove(idx));

    let name = if draft.name.trim().is_empty() {
        format!("Cover Letter {}", now.format("%-m/%-d/%Y"))
    } else {
        draft.name
    };

    let letter = CoverLetter {
        id: draft.id.unwrap_or_else(Uuid::new_v4),
        name,
        company: draft.company,
        position: draft.position,
        content: draft.content,
        created_at: existing.map(|l| l.created_at).unwrap_or(now),
        updated_at: now,
    };
    letters.push(letter.clone());
    Ok(letter)
}

/// Removes the letter with `id`; returns whether one was removed.
pub fn remove_letter(letters: &mut Vec<CoverLetter>, id: Uuid) -> bool {
    let before = letters.len();
    letters.retain(|l| l.id != id);
    letters.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft(content: &str) -> CoverLetterDraft {
        CoverLetterDraft {
            content: content.to_string(),
            ..Default::default()
        }
    }

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_new_letter_gets_id_and_default_name() {
        let mut letters = Vec::new();
        let letter = upsert_letter(&mut letters, draft("Dear team"), at(5)).unwrap();
        assert_eq!(letters.len(), 1);
        assert_eq!(letter.name, "Cover Letter 3/5/2026");
        assert_eq!(letter.created_at, at(5));
    }

    #[test]
    fn test_blank_content_rejected() {
        let mut letters = Vec::new();
        let err = upsert_letter(&mut letters, draft("  \n"), at(1)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(letters.is_empty());
    }

    #[test]
    fn test_update_keeps_created_at_and_moves_to_end() {
        let mut letters = Vec::new();
        let first = upsert_letter(&mut letters, draft("one"), at(1)).unwrap();
        upsert_letter(&mut letters, draft("two"), at(2)).unwrap();

        let edit = CoverLetterDraft {
            id: Some(first.id),
            name: "Edited".into(),
            content: "one, revised".into(),
            ..Default::default()
        };
        let updated = upsert_letter(&mut letters, edit, at(3)).unwrap();

        assert_eq!(letters.len(), 2);
        assert_eq!(letters[1].id, first.id);
        assert_eq!(updated.created_at, at(1));
        assert_eq!(updated.updated_at, at(3));
        assert_eq!(updated.name, "Edited");
    }

    #[test]
    fn test_unknown_id_is_inserted_with_that_id() {
        let mut letters = Vec::new();
        let id = Uuid::new_v4();
        let edit = CoverLetterDraft {
            id: Some(id),
            content: "hi".into(),
            ..Default::default()
        };
        let letter = upsert_letter(&mut letters, edit, at(4)).unwrap();
        assert_eq!(letter.id, id);
        assert_eq!(letter.created_at, at(4));
    }

    #[test]
    fn test_remove_letter() {
        let mut letters = Vec::new();
        let letter = upsert_letter(&mut letters, draft("x"), at(1)).unwrap();
        assert!(!remove_letter(&mut letters, Uuid::new_v4()));
        assert!(remove_letter(&mut letters, letter.id));
        assert!(letters.is_empty());
    }
}
