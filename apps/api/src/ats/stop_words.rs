//! Stop-word sets for the keyword tokenizer.
//!
//! The default set is the reference list used by the ATS analyzer; an
//! alternative list can be loaded from disk at startup so the scorer stays
//! testable against arbitrary vocabularies.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

/// Common English function words plus résumé/job-posting noise words.
const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "do", "does", "did", "will", "would", "could",
    "should", "may", "might", "must", "shall", "can", "need", "dare", "ought", "used",
    "to", "of", "in", "for", "on", "with", "at", "by", "from", "as", "into", "through",
    "during", "before", "after", "above", "below", "between", "under", "again", "further",
    "then", "once", "here", "there", "when", "where", "why", "how", "all", "each",
    "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only", "own",
    "same", "so", "than", "too", "very", "just", "also", "now", "we", "you", "your",
    "our", "their", "this", "that", "these", "those", "i", "me", "my", "myself", "he",
    "him", "his", "she", "her", "it", "its", "they", "them", "what", "which", "who",
    "whom", "if", "about", "up", "down", "out", "off", "over", "any", "both", "each",
    "work", "working", "job", "position", "role", "team", "company", "able", "experience",
    "including", "requirements", "required", "preferred", "skills", "years", "year",
];

/// A lowercase stop-word set.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::from_words(DEFAULT_STOP_WORDS.iter().copied())
    }
}

impl StopWords {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Parses one word per line; blank lines and `#` comments are skipped.
    pub fn parse(source: &str) -> Self {
        Self::from_words(
            source
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stop-word list at {}", path.display()))?;
        Ok(Self::parse(&source))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_contains_domain_noise_words() {
        let stop = StopWords::default();
        for word in ["experience", "skills", "required", "years", "the", "team"] {
            assert!(stop.contains(word), "expected '{word}' to be a stop word");
        }
        assert!(!stop.contains("python"));
    }

    #[test]
    fn test_default_dedups_repeated_entries() {
        // "each" appears twice in the reference list
        let stop = StopWords::default();
        assert_eq!(stop.len(), DEFAULT_STOP_WORDS.len() - 1);
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let stop = StopWords::parse("# custom list\nFoo\n\n  bar  \n#baz\n");
        assert_eq!(stop.len(), 2);
        assert!(stop.contains("foo"));
        assert!(stop.contains("bar"));
        assert!(!stop.contains("baz"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "alpha\nbeta").unwrap();
        let stop = StopWords::load(file.path()).unwrap();
        assert!(stop.contains("alpha"));
        assert!(stop.contains("beta"));
    }

    #[test]
    fn test_load_missing_file_errors() {
        let err = StopWords::load(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.to_string().contains("stop-word list"));
    }
}
