//! Keyword tokenizer and frequency ranking.

use std::collections::HashMap;

use crate::ats::stop_words::StopWords;

/// Tokens this short never count as keywords.
const MIN_KEYWORD_CHARS: usize = 3;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Splits `text` into normalized keywords.
///
/// Lowercases, turns every char that is not an ASCII word char, whitespace
/// or `-` into a space, splits on whitespace, then drops short tokens and
/// stop words. Duplicates are kept; callers count them.
pub fn tokenize(text: &str, stop_words: &StopWords) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if is_word_char(c) || c.is_whitespace() || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_KEYWORD_CHARS)
        .filter(|token| !stop_words.contains(token))
        .map(str::to_string)
        .collect()
}

/// Distinct keywords of `text`, most frequent first.
///
/// Ties keep first-seen order.
pub fn extract_keywords(text: &str, stop_words: &StopWords) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for token in tokenize(text, stop_words) {
        let count = counts.entry(token.clone()).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    // sort_by is stable, so equal counts stay in first-seen order
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order
}
