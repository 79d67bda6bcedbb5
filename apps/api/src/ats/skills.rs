//! Skills-section scoring.
//!
//! Unlike the prose sections, the skills score asks what fraction of the
//! candidate's own skills the job text mentions, so the denominator is the
//! skill count and not the job keyword count. Multi-word skills whose words
//! mostly appear earn partial credit.

use crate::models::resume::Skills;

/// Credit for a skill whose full phrase is absent but most of its words appear.
pub const PARTIAL_CREDIT: f64 = 0.75;

/// Fraction of a skill's words (rounded up) that must appear for partial credit.
pub const PARTIAL_WORD_RATIO: f64 = 0.6;

/// Shortest skill word that counts towards a partial match.
const MIN_WORD_CHARS: usize = 3;

/// Lowercases, turns hyphens into spaces and collapses whitespace runs.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Credit in `[0, 1]` for one skill against normalized job text.
pub fn skill_credit(skill: &str, job_normalized: &str) -> f64 {
    let skill_normalized = normalize(skill);
    if job_normalized.contains(&skill_normalized) {
        return 1.0;
    }

    let words: Vec<&str> = skill_normalized
        .split(' ')
        .filter(|w| w.chars().count() >= MIN_WORD_CHARS)
        .collect();
    if words.is_empty() {
        return 0.0;
    }

    let hits = words.iter().filter(|w| job_normalized.contains(*w)).count();
    let needed = (words.len() as f64 * PARTIAL_WORD_RATIO).ceil() as usize;

    if hits >= needed {
        PARTIAL_CREDIT
    } else {
        0.0
    }
}

/// Percentage (0–100) of the candidate's skills found in the job text.
///
/// Returns 0 when there are no skills or the job text is empty.
pub fn skills_score(skills: &Skills, job_text: &str) -> u32 {
    let all: Vec<&String> = skills.all().collect();
    if all.is_empty() || job_text.is_empty() {
        return 0;
    }

    let job_normalized = normalize(job_text);
    let credit: f64 = all
        .iter()
        .map(|skill| skill_credit(skill, &job_normalized))
        .sum();

    ((credit / all.len() as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn technical(list: &[&str]) -> Skills {
        Skills {
            technical: list.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Cross-Functional   TEAMS\n"), "cross functional teams");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_all_skills_found_scores_100_regardless_of_job_size() {
        let job = "python kubernetes docker terraform aws gcp azure";
        assert_eq!(skills_score(&technical(&["Python", "Docker"]), job), 100);
    }

    #[test]
    fn test_full_phrase_beats_partial() {
        let job = "we need strong problem solving and python skills.";
        assert_eq!(skill_credit("Problem Solving", &normalize(job)), 1.0);
    }

    #[test]
    fn test_two_word_skill_with_one_word_present_gets_nothing() {
        // ceil(0.6 * 2) = 2 words needed
        let job = normalize("strong management background");
        assert_eq!(skill_credit("Project Management", &job), 0.0);
    }

    #[test]
    fn test_partial_credit_when_words_scattered() {
        let job = normalize("you will manage each project and its management plan");
        assert_eq!(skill_credit("Project Management", &job), PARTIAL_CREDIT);
    }

    #[test]
    fn test_three_word_skill_needs_two_words() {
        // ceil(0.6 * 3) = 2
        let job = normalize("strategic roadmap planning");
        assert_eq!(skill_credit("Strategic Account Planning", &job), PARTIAL_CREDIT);

        let job = normalize("quarterly planning");
        assert_eq!(skill_credit("Strategic Account Planning", &job), 0.0);
    }

    #[test]
    fn test_short_words_do_not_count_towards_threshold() {
        // "to" is dropped, leaving two qualifying words
        let job = normalize("attention to every detail matters");
        assert_eq!(skill_credit("Attention to Detail", &job), PARTIAL_CREDIT);
    }

    #[test]
    fn test_hyphenated_skill_matches_spaced_job_text() {
        let job = normalize("Experience with test driven development");
        assert_eq!(skill_credit("Test-Driven Development", &job), 1.0);
    }

    #[test]
    fn test_short_words_only_skill_gets_no_partial() {
        let job = normalize("nothing useful");
        assert_eq!(skill_credit("C#", &job), 0.0);
        assert_eq!(skill_credit("R", &job), 0.0);
    }

    #[test]
    fn test_mixed_credit_rounding() {
        // 1 + 0.75 + 0 = 1.75 / 3 = 58.33 → 58
        let job = "python, plus some project work and management";
        let skills = technical(&["Python", "Project Management", "Haskell"]);
        assert_eq!(skills_score(&skills, job), 58);
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        assert_eq!(skills_score(&Skills::default(), "python"), 0);
        assert_eq!(skills_score(&technical(&["Python"]), ""), 0);
    }

    #[test]
    fn test_order_independent() {
        let job = "rust tokio axum postgres leadership";
        let a = Skills {
            technical: vec!["Rust".into(), "Go".into(), "Axum".into()],
            soft: vec!["Leadership".into(), "Public Speaking".into()],
            industry: vec![],
        };
        let b = Skills {
            technical: vec!["Axum".into(), "Rust".into(), "Go".into()],
            soft: vec!["Public Speaking".into(), "Leadership".into()],
            industry: vec![],
        };
        assert_eq!(skills_score(&a, job), skills_score(&b, job));
    }

    #[test]
    fn test_substring_semantics_inside_longer_words() {
        // "java" is contained in "javascript"
        let job = normalize("javascript developer");
        assert_eq!(skill_credit("Java", &job), 1.0);
    }
}
