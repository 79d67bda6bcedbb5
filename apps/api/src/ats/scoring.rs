//! ATS keyword-match scoring: how well a résumé covers a pasted job posting.
//!
//! Default backend: `KeywordMatchScorer` (bag-of-words, pure, deterministic).
//! `AppState` holds an `Arc<dyn MatchScorer>` so the backend can be swapped
//! without touching handlers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ats::sections::{resume_text, section_texts, SectionName};
use crate::ats::skills::skills_score;
use crate::ats::stop_words::StopWords;
use crate::ats::tokenizer::{extract_keywords, tokenize};
use crate::models::resume::ResumeRecord;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScores {
    pub summary: u32,
    pub experience: u32,
    pub education: u32,
    pub skills: u32,
}

impl SectionScores {
    pub fn get(&self, section: SectionName) -> u32 {
        match section {
            SectionName::Summary => self.summary,
            SectionName::Experience => self.experience,
            SectionName::Education => self.education,
            SectionName::Skills => self.skills,
        }
    }
}

/// Result of one "Analyze" run. Never persisted; each run replaces the last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub score: u32, // 0 – 100
    pub matched: Vec<String>,
    /// Unmatched job keywords in job-frequency order, capped.
    pub missing: Vec<String>,
    /// Number of job keywords considered.
    pub total: usize,
    pub section_scores: SectionScores,
    /// Weakest non-empty section, if any section has content.
    pub lowest_section: Option<SectionName>,
}

/// Caps applied while analyzing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtsLimits {
    pub max_keywords: usize,
    pub max_missing: usize,
}

impl Default for AtsLimits {
    fn default() -> Self {
        Self {
            max_keywords: 50,
            max_missing: 20,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores a résumé against a job posting. Never fails: empty input yields an
/// empty report.
pub trait MatchScorer: Send + Sync {
    fn analyze(&self, job_description: &str, resume: &ResumeRecord) -> MatchReport;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordMatchScorer
// ────────────────────────────────────────────────────────────────────────────

/// Bag-of-words scorer.
///
/// Algorithm:
/// 1. Top `max_keywords` job keywords by frequency → `J`
/// 2. A keyword matches if the flattened résumé text contains it, or it is
///    one of the résumé's own keywords
/// 3. score = matched / |J| × 100
/// 4. Section scores: substring coverage of `J` for prose sections, the
///    skill-centric score for skills
#[derive(Debug, Clone, Default)]
pub struct KeywordMatchScorer {
    pub stop_words: StopWords,
    pub limits: AtsLimits,
}

impl KeywordMatchScorer {
    pub fn new(stop_words: StopWords, limits: AtsLimits) -> Self {
        Self { stop_words, limits }
    }

    /// The considered job keyword set `J`.
    pub fn job_keywords(&self, job_description: &str) -> Vec<String> {
        let mut keywords = extract_keywords(job_description, &self.stop_words);
        keywords.truncate(self.limits.max_keywords);
        keywords
    }
}

impl MatchScorer for KeywordMatchScorer {
    fn analyze(&self, job_description: &str, resume: &ResumeRecord) -> MatchReport {
        if job_description.trim().is_empty() {
            return MatchReport::default();
        }

        let job_keywords = self.job_keywords(job_description);
        let job_lower = job_description.to_lowercase();
        let resume_lower = resume_text(resume).to_lowercase();
        let resume_keywords: std::collections::HashSet<String> =
            tokenize(&resume_lower, &self.stop_words).into_iter().collect();

        let (matched, missing): (Vec<String>, Vec<String>) =
            job_keywords.iter().cloned().partition(|keyword| {
                resume_lower.contains(keyword.as_str()) || resume_keywords.contains(keyword)
            });

        let score = percentage(matched.len() as f64, job_keywords.len());

        let texts = section_texts(resume);
        let section_scores = SectionScores {
            summary: section_score(&texts.summary, &job_keywords),
            experience: section_score(&texts.experience, &job_keywords),
            education: section_score(&texts.education, &job_keywords),
            skills: skills_score(&resume.skills, &job_lower),
        };
        let lowest_section = lowest_section(resume, &section_scores);

        debug!(
            score,
            total = job_keywords.len(),
            matched = matched.len(),
            ?lowest_section,
            "ATS analysis complete"
        );

        MatchReport {
            score,
            matched,
            missing: missing.into_iter().take(self.limits.max_missing).collect(),
            total: job_keywords.len(),
            section_scores,
            lowest_section,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section helpers
// ────────────────────────────────────────────────────────────────────────────

fn percentage(part: f64, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part / whole as f64) * 100.0).round() as u32
}

/// Share (0–100) of `job_keywords` that occur as substrings of `text`.
pub fn section_score(text: &str, job_keywords: &[String]) -> u32 {
    if text.is_empty() || job_keywords.is_empty() {
        return 0;
    }
    let text = text.to_lowercase();
    let hits = job_keywords
        .iter()
        .filter(|kw| text.contains(kw.as_str()))
        .count();
    percentage(hits as f64, job_keywords.len())
}

/// Lowest-scoring section among those with content.
///
/// Empty sections are skipped rather than ranked as 0. Ties go to the
/// earlier section in `SectionName::ALL`.
pub fn lowest_section(resume: &ResumeRecord, scores: &SectionScores) -> Option<SectionName> {
    SectionName::ALL
        .into_iter()
        .filter(|section| section.has_content(resume))
        .fold(None, |lowest: Option<SectionName>, section| match lowest {
            Some(current) if scores.get(current) <= scores.get(section) => Some(current),
            _ => Some(section),
        })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
