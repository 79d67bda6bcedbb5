//! Résumé text extraction: one whole-document blob plus per-section texts.

use serde::{Deserialize, Serialize};

use crate::models::resume::ResumeRecord;

/// The sections that get an individual match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionName {
    Summary,
    Experience,
    Education,
    Skills,
}

impl SectionName {
    /// Fixed iteration order; also the tie-break order for the weakest section.
    pub const ALL: [SectionName; 4] = [
        SectionName::Summary,
        SectionName::Experience,
        SectionName::Education,
        SectionName::Skills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionName::Summary => "summary",
            SectionName::Experience => "experience",
            SectionName::Education => "education",
            SectionName::Skills => "skills",
        }
    }

    /// Whether `record` has any content for this section.
    pub fn has_content(&self, record: &ResumeRecord) -> bool {
        match self {
            SectionName::Summary => !record.summary.is_empty(),
            SectionName::Experience => !record.experience.is_empty(),
            SectionName::Education => !record.education.is_empty(),
            SectionName::Skills => !record.skills.is_empty(),
        }
    }
}

/// Per-section text, kept apart so section scores never see each other's content.
/// Skills are scored from the structured lists, not from text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionTexts {
    pub summary: String,
    pub experience: String,
    pub education: String,
}

fn join_non_empty<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Flattens the whole résumé into one blob for document-level matching.
///
/// Order: contact name, summary, experience (title, company, bullets),
/// education (degree, field, school), skills, certifications (name, issuer).
pub fn resume_text(record: &ResumeRecord) -> String {
    let mut parts: Vec<&str> = vec![record.contact.name.as_str(), record.summary.as_str()];

    for exp in &record.experience {
        parts.push(&exp.title);
        parts.push(&exp.company);
        parts.extend(exp.bullets.iter().map(String::as_str));
    }
    for edu in &record.education {
        parts.push(&edu.degree);
        parts.push(&edu.field);
        parts.push(&edu.school);
    }
    parts.extend(record.skills.all().map(String::as_str));
    for cert in &record.certifications {
        parts.push(&cert.name);
        parts.push(&cert.issuer);
    }

    join_non_empty(parts)
}

pub fn section_texts(record: &ResumeRecord) -> SectionTexts {
    let experience = record
        .experience
        .iter()
        .map(|exp| {
            join_non_empty(
                [exp.title.as_str(), exp.company.as_str()]
                    .into_iter()
                    .chain(exp.bullets.iter().map(String::as_str)),
            )
        })
        .collect::<Vec<_>>();

    let education = record
        .education
        .iter()
        .map(|edu| join_non_empty([edu.degree.as_str(), edu.field.as_str(), edu.school.as_str()]))
        .collect::<Vec<_>>();

    SectionTexts {
        summary: record.summary.clone(),
        experience: join_non_empty(experience.iter().map(String::as_str)),
        education: join_non_empty(education.iter().map(String::as_str)),
    }
}
