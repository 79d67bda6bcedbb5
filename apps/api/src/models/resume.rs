use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub company: String,
    pub title: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub graduation_date: String,
    pub gpa: String,
}

/// The three skill buckets the wizard edits independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub industry: Vec<String>,
}

impl Skills {
    /// Technical, soft, then industry, in list order.
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.technical
            .iter()
            .chain(self.soft.iter())
            .chain(self.industry.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.soft.is_empty() && self.industry.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub license_number: String,
    pub issuer: String,
    pub date: String,
    pub expiration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Clearance {
    pub level: String,
    pub status: String,
    pub investigation_date: String,
    pub expiration_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MilitaryService {
    pub branch: String,
    pub rank: String,
    pub dates: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub language: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Award {
    pub award: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reference {
    pub name: String,
    pub title: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub relationship: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct References {
    /// "Available upon request" instead of a listed set.
    pub available: bool,
    pub list: Vec<Reference>,
}

impl Default for References {
    fn default() -> Self {
        Self {
            available: true,
            list: Vec::new(),
        }
    }
}

/// The full résumé document edited by the wizard.
///
/// Every field defaults when absent, so partially filled documents (and older
/// backups) always deserialize. Free-form list sections the wizard edits
/// generically (volunteer, publications, projects, affiliations) are carried
/// through untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub contact: Contact,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Skills,
    pub certifications: Vec<Certification>,
    pub clearances: Vec<Clearance>,
    pub military: Vec<MilitaryService>,
    pub languages: Vec<Language>,
    pub awards: Vec<Award>,
    pub references: References,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Whether a saved document has enough content to offer "continue where you left off".
pub fn has_meaningful_data(record: &ResumeRecord) -> bool {
    !record.contact.name.trim().is_empty()
        || !record.contact.email.trim().is_empty()
        || !record.summary.trim().is_empty()
        || !record.experience.is_empty()
        || !record.education.is_empty()
        || !record.skills.is_empty()
        || !record.certifications.is_empty()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionToggle {
    pub enabled: bool,
    pub label: String,
}

const DEFAULT_SECTIONS: &[(&str, bool, &str)] = &[
    ("contact", true, "Contact Information"),
    ("experience", true, "Work Experience"),
    ("education", true, "Education"),
    ("skills", true, "Skills"),
    ("summary", false, "Summary / Objective"),
    ("certifications", false, "Certifications / Licenses"),
    ("clearances", false, "Security Clearances"),
    ("military", false, "Military Service"),
    ("volunteer", false, "Volunteer Experience"),
    ("publications", false, "Publications"),
    ("projects", false, "Projects / Portfolio"),
    ("languages", false, "Languages"),
    ("affiliations", false, "Professional Affiliations"),
    ("awards", false, "Awards / Honors"),
    ("references", false, "References"),
];

/// Which résumé sections are switched on, keyed by section name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sections(pub BTreeMap<String, SectionToggle>);

impl Default for Sections {
    fn default() -> Self {
        Self(
            DEFAULT_SECTIONS
                .iter()
                .map(|(key, enabled, label)| {
                    (
                        key.to_string(),
                        SectionToggle {
                            enabled: *enabled,
                            label: label.to_string(),
                        },
                    )
                })
                .collect(),
        )
    }
}

impl Sections {
    pub fn is_enabled(&self, key: &str) -> bool {
        self.0.get(key).map(|s| s.enabled).unwrap_or(false)
    }

    /// Overlays `other` onto `self`; keys present in `other` win.
    pub fn merge(&mut self, other: Sections) {
        self.0.extend(other.0);
    }
}

/// The persisted unit: section toggles plus résumé data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub sections: Sections,
    pub data: ResumeRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes_to_defaults() {
        let record: ResumeRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, ResumeRecord::default());
        assert!(record.references.available);
    }

    #[test]
    fn test_camel_case_fields_and_partial_entries() {
        let json = r#"{
            "contact": {"name": "Jane Doe"},
            "experience": [{"title": "Engineer", "startDate": "2021-04", "current": true}],
            "certifications": [{"name": "A&P", "licenseNumber": "123"}]
        }"#;
        let record: ResumeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.contact.name, "Jane Doe");
        assert_eq!(record.experience[0].start_date, "2021-04");
        assert!(record.experience[0].current);
        assert!(record.experience[0].bullets.is_empty());
        assert_eq!(record.certifications[0].license_number, "123");
    }

    #[test]
    fn test_unknown_sections_are_preserved() {
        let json = r#"{"projects": [{"name": "Rover", "url": "x"}]}"#;
        let record: ResumeRecord = serde_json::from_str(json).unwrap();
        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["projects"][0]["name"], "Rover");
    }

    #[test]
    fn test_skills_all_keeps_bucket_order() {
        let skills = Skills {
            technical: vec!["Rust".into()],
            soft: vec!["Leadership".into()],
            industry: vec!["Lean".into()],
        };
        let all: Vec<&String> = skills.all().collect();
        assert_eq!(all, vec!["Rust", "Leadership", "Lean"]);
    }

    #[test]
    fn test_has_meaningful_data() {
        assert!(!has_meaningful_data(&ResumeRecord::default()));

        let mut record = ResumeRecord::default();
        record.summary = "   ".into();
        assert!(!has_meaningful_data(&record));

        record.skills.soft.push("Empathy".into());
        assert!(has_meaningful_data(&record));
    }

    #[test]
    fn test_default_sections() {
        let sections = Sections::default();
        assert!(sections.is_enabled("contact"));
        assert!(sections.is_enabled("skills"));
        assert!(!sections.is_enabled("summary"));
        assert!(!sections.is_enabled("nonexistent"));
    }

    #[test]
    fn test_sections_merge_overrides_only_given_keys() {
        let mut sections = Sections::default();
        let mut patch = BTreeMap::new();
        patch.insert(
            "summary".to_string(),
            SectionToggle {
                enabled: true,
                label: "Summary / Objective".to_string(),
            },
        );
        sections.merge(Sections(patch));
        assert!(sections.is_enabled("summary"));
        assert!(sections.is_enabled("contact"));
    }
}
