use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Most entries remembered per category.
pub const MAX_PER_CATEGORY: usize = 50;

/// Categories the wizard's autocomplete inputs use.
pub const CATEGORIES: &[&str] = &["companies", "titles", "schools", "degrees", "skills"];

/// Values the user typed before, newest first, per input category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionHistory(pub BTreeMap<String, Vec<String>>);

impl Default for SuggestionHistory {
    fn default() -> Self {
        Self(
            CATEGORIES
                .iter()
                .map(|c| (c.to_string(), Vec::new()))
                .collect(),
        )
    }
}

impl SuggestionHistory {
    pub fn get(&self, category: &str) -> &[String] {
        self.0.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Remembers `value` at the front of `category`. Returns whether anything changed.
    ///
    /// Values under two characters and exact repeats are ignored.
    pub fn record(&mut self, category: &str, value: &str) -> bool {
        if value.chars().count() < 2 {
            return false;
        }
        let entries = self.0.entry(category.to_string()).or_default();
        if entries.iter().any(|v| v == value) {
            return false;
        }
        entries.insert(0, value.to_string());
        entries.truncate(MAX_PER_CATEGORY);
        true
    }
}
