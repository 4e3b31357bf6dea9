//! Mock keyword extraction from free-form job descriptions.
//!
//! Extraction is deterministic and entirely local: tokenize the input,
//! match tokens against a fixed vocabulary by bidirectional substring
//! containment, append rule additions, then dedup and cap the result.
//! [`KeywordExtractor`] wraps the pure function with a simulated service
//! delay so the interactive surfaces exercise a real pending state.

mod vocabulary;

use std::sync::LazyLock;
use std::time::Duration;

use itertools::Itertools;
use regex::Regex;
use tracing::debug;

use crate::error::{Result, ScoutError};

pub use vocabulary::{KeywordRule, RULES, VOCABULARY};

/// Default cap on the number of extracted keywords.
pub const DEFAULT_MAX_KEYWORDS: usize = 12;

/// Default simulated extraction latency.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

static TOKEN_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());

/// Rejects empty or whitespace-only job descriptions.
///
/// This is the only validation a submission goes through; anything with
/// visible content is accepted as-is.
pub fn validate_job_description(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(ScoutError::EmptyJobDescription);
    }
    Ok(())
}

/// Splits lowercased text on non-word boundaries, dropping fragments too
/// short to be meaningful matches. Single characters would otherwise match
/// nearly every vocabulary term by containment.
fn tokenize(lowered: &str) -> Vec<&str> {
    TOKEN_BOUNDARY
        .split(lowered)
        .filter(|token| token.chars().count() >= 2)
        .collect()
}

/// Extracts up to `max` keywords from a job description.
///
/// A vocabulary term matches when any token contains the lowercased term
/// or the term contains the token, so "react" matches `React` and "js"
/// matches `Node.js`. Rule additions are appended after vocabulary matches,
/// then the combined list is deduplicated in first-seen order and capped.
pub fn extract_keywords(text: &str, max: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let tokens = tokenize(&lowered);

    let vocabulary_matches = VOCABULARY.iter().copied().filter(|term| {
        let term_lower = term.to_lowercase();
        tokens
            .iter()
            .any(|token| term_lower.contains(token) || token.contains(term_lower.as_str()))
    });

    let rule_additions = RULES
        .iter()
        .filter(|rule| rule.triggers.iter().any(|trigger| lowered.contains(trigger)))
        .flat_map(|rule| rule.additions.iter().copied());

    let keywords: Vec<String> = vocabulary_matches
        .chain(rule_additions)
        .unique()
        .take(max)
        .map(ToString::to_string)
        .collect();

    debug!(tokens = tokens.len(), keywords = keywords.len(), "extracted keywords");
    keywords
}

/// Keyword extraction with a configurable simulated latency.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    latency: Duration,
    max_keywords: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            max_keywords: DEFAULT_MAX_KEYWORDS,
        }
    }
}

impl KeywordExtractor {
    pub fn new(latency: Duration, max_keywords: usize) -> Self {
        Self { latency, max_keywords }
    }

    /// Latency-free extractor for tests and non-interactive callers.
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO, DEFAULT_MAX_KEYWORDS)
    }

    pub const fn latency(&self) -> Duration {
        self.latency
    }

    /// Validates the input, waits out the simulated service delay, then
    /// runs the extraction heuristic.
    pub async fn extract(&self, text: &str) -> Result<Vec<String>> {
        validate_job_description(text)?;
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(extract_keywords(text, self.max_keywords))
    }
}
