//! JSON backup export/import.
//!
//! A backup bundles section toggles, résumé data and saved cover letters.
//! Importing overlays whatever parts the file carries onto the current state:
//! section toggles and top-level résumé fields are merged key by key, cover
//! letters are replaced wholesale.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::cover_letter::CoverLetter;
use crate::models::resume::{ResumeDocument, ResumeRecord, Sections};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Sections>,
    /// Kept as raw JSON so absent fields can be told apart from empty ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_letters: Option<Vec<CoverLetter>>,
}

impl Backup {
    pub fn from_state(document: &ResumeDocument, cover_letters: &[CoverLetter]) -> Result<Self, AppError> {
        let data = serde_json::to_value(&document.data)
            .map_err(|e| AppError::Internal(e.into()))?;
        Ok(Self {
            sections: Some(document.sections.clone()),
            data: Some(data),
            cover_letters: Some(cover_letters.to_vec()),
        })
    }
}

/// Suggested download name: `Jane_Doe_resume.json`, or `fallback` without a name.
pub fn file_name_for(contact_name: &str, fallback: &str) -> String {
    let stem = contact_name.split_whitespace().collect::<Vec<_>>().join("_");
    if stem.is_empty() {
        fallback.to_string()
    } else {
        format!("{stem}_resume.json")
    }
}

pub fn backup_file_name(record: &ResumeRecord) -> String {
    file_name_for(&record.contact.name, "resume_backup.json")
}

/// Overlays `backup` onto the current state.
pub fn apply_backup(
    document: &mut ResumeDocument,
    cover_letters: &mut Vec<CoverLetter>,
    backup: Backup,
) -> Result<(), AppError> {
    if let Some(sections) = backup.sections {
        document.sections.merge(sections);
    }

    if let Some(data) = backup.data {
        let Value::Object(incoming) = data else {
            return Err(AppError::Validation(
                "Backup 'data' must be a JSON object".to_string(),
            ));
        };
        let mut merged = match serde_json::to_value(&document.data) {
            Ok(Value::Object(map)) => map,
            Ok(_) => serde_json::Map::new(),
            Err(e) => return Err(AppError::Internal(e.into())),
        };
        merged.extend(incoming);
        document.data = serde_json::from_value(Value::Object(merged))
            .map_err(|e| AppError::Validation(format!("Backup data is malformed: {e}")))?;
    }

    if let Some(letters) = backup.cover_letters {
        *cover_letters = letters;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    fn letter(name: &str) -> CoverLetter {
        CoverLetter {
            id: Uuid::new_v4(),
            name: name.to_string(),
            company: String::new(),
            position: String::new(),
            content: "Dear team".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_file_name() {
        let mut record = ResumeRecord::default();
        assert_eq!(backup_file_name(&record), "resume_backup.json");
        record.contact.name = "Jane  Q Doe".into();
        assert_eq!(backup_file_name(&record), "Jane_Q_Doe_resume.json");
    }

    #[test]
    fn test_export_shape() {
        let mut document = ResumeDocument::default();
        document.data.summary = "hello".into();
        let backup = Backup::from_state(&document, &[letter("A")]).unwrap();
        let json = serde_json::to_value(&backup).unwrap();
        assert_eq!(json["data"]["summary"], "hello");
        assert_eq!(json["sections"]["contact"]["enabled"], true);
        assert_eq!(json["coverLetters"][0]["name"], "A");
    }

    #[test]
    fn test_import_merges_top_level_fields() {
        let mut document = ResumeDocument::default();
        document.data.summary = "keep me".into();
        document.data.skills.technical = vec!["Rust".into()];
        let mut letters = vec![letter("old")];

        let backup: Backup = serde_json::from_value(json!({
            "data": {"contact": {"name": "Jane"}},
            "sections": {"summary": {"enabled": true, "label": "Summary / Objective"}}
        }))
        .unwrap();
        apply_backup(&mut document, &mut letters, backup).unwrap();

        assert_eq!(document.data.contact.name, "Jane");
        assert_eq!(document.data.summary, "keep me");
        assert_eq!(document.data.skills.technical, vec!["Rust"]);
        assert!(document.sections.is_enabled("summary"));
        assert!(document.sections.is_enabled("contact"));
        assert_eq!(letters.len(), 1);
        assert_eq!(letters[0].name, "old");
    }

    #[test]
    fn test_import_replaces_cover_letters() {
        let mut document = ResumeDocument::default();
        let mut letters = vec![letter("old")];
        let backup = Backup {
            sections: None,
            data: None,
            cover_letters: Some(vec![letter("new1"), letter("new2")]),
        };
        apply_backup(&mut document, &mut letters, backup).unwrap();
        assert_eq!(letters.len(), 2);
        assert_eq!(letters[0].name, "new1");
    }

    #[test]
    fn test_import_rejects_non_object_data() {
        let mut document = ResumeDocument::default();
        let backup = Backup {
            sections: None,
            data: Some(json!([1, 2, 3])),
            cover_letters: None,
        };
        let err = apply_backup(&mut document, &mut Vec::new(), backup).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
