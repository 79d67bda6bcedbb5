// ATS keyword analyzer: job posting → résumé match report.
// Pure and synchronous; handlers call it inline without spawning.

pub mod handlers;
pub mod scoring;
pub mod sections;
pub mod skills;
pub mod stop_words;
pub mod tokenizer;

pub use scoring::{KeywordMatchScorer, MatchReport, MatchScorer};
pub use stop_words::StopWords;
