//! Noise-token removal.
//!
//! All stripping is whole-word (`\b...\b`), so a noise word never eats part of a
//! longer word: with `mov` configured, "movie" survives intact.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::constants::{DEFAULT_NOISE_WORDS, GENERIC_LABELS};
use crate::scoring::Query;

use super::error::{ExtractionError, ExtractionResult};

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d{1,2}:\d{2}(?::\d{2})?\b").expect("duration pattern is valid")
});

static FILE_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d+(?:\.\d+)?\s?(?:kb|mb|gb)\b").expect("file size pattern is valid")
});

static DURATION_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,2}:\d{2}(?::\d{2})?$").expect("duration token pattern is valid")
});

static FILE_SIZE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(?:\.\d+)?\s?(?:kb|mb|gb)$").expect("file size token pattern is valid")
});

static FILE_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:mp4|mkv|avi|mp3|wav|pdf|docx?|xlsx?|pptx?)\b")
        .expect("file extension pattern is valid")
});

static DEFAULT_FILTER: LazyLock<NoiseFilter> = LazyLock::new(|| {
    NoiseFilter::new(DEFAULT_NOISE_WORDS.iter().copied()).expect("default noise words compile")
});

/// Compiled set of noise words plus the built-in duration and file-size patterns.
#[derive(Debug, Clone)]
pub struct NoiseFilter {
    words: Vec<String>,
    pattern: Option<Regex>,
}

impl Default for NoiseFilter {
    fn default() -> Self {
        DEFAULT_FILTER.clone()
    }
}

impl NoiseFilter {
    /// Builds a filter from noise words. Words are trimmed and lowercased; empties are dropped.
    pub fn new<I, S>(words: I) -> ExtractionResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        // Longest first so multi-word entries win over their prefixes.
        words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        words.dedup();

        let pattern = if words.is_empty() {
            None
        } else {
            let alternation = words
                .iter()
                .map(|w| regex::escape(w))
                .collect::<Vec<_>>()
                .join("|");
            let compiled = Regex::new(&format!(r"\b(?:{})\b", alternation))
                .map_err(|source| ExtractionError::NoisePattern { source })?;
            Some(compiled)
        };

        Ok(Self { words, pattern })
    }

    /// Parses a comma-separated list (the `SIEVE_NOISE_WORDS` format).
    pub fn from_csv(list: &str) -> ExtractionResult<Self> {
        Self::new(list.split(','))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Copy of this filter without the noise words the query itself uses.
    pub fn sparing(&self, query: &Query) -> ExtractionResult<Self> {
        let kept: Vec<&str> = self
            .words
            .iter()
            .map(String::as_str)
            .filter(|w| !query.contains_phrase(w))
            .collect();

        if kept.len() == self.words.len() {
            return Ok(self.clone());
        }

        debug!(
            query = %query,
            spared = self.words.len() - kept.len(),
            "Sparing noise words that appear in the query"
        );
        Self::new(kept)
    }

    /// Removes noise words, durations and file sizes from lowercased text, then
    /// collapses whitespace.
    pub fn strip(&self, lowered: &str) -> String {
        let without_words = match &self.pattern {
            Some(pattern) => pattern.replace_all(lowered, ""),
            None => lowered.into(),
        };
        let without_durations = DURATION.replace_all(&without_words, "");
        let without_sizes = FILE_SIZE.replace_all(&without_durations, "");
        collapse_whitespace(&without_sizes)
    }

    /// Returns `true` if any noise word occurs in `lowered` as a whole word.
    pub fn contains_noise(&self, lowered: &str) -> bool {
        self.pattern.as_ref().is_some_and(|p| p.is_match(lowered))
    }
}

/// Returns `true` for tokens that never carry search meaning: empty tokens, file
/// extensions, durations, file sizes and generic card labels.
pub fn is_irrelevant_token(token: &str) -> bool {
    let token = token.trim().to_lowercase();
    if token.is_empty() {
        return true;
    }
    FILE_EXTENSION.is_match(&token)
        || DURATION_TOKEN.is_match(&token)
        || FILE_SIZE.is_match(&token)
        || GENERIC_LABELS.contains(&token.as_str())
}

/// Returns `true` for a whole block that is only a duration or a file size.
pub(crate) fn is_measurement_block(lowered: &str) -> bool {
    DURATION_TOKEN.is_match(lowered) || FILE_SIZE_TOKEN.is_match(lowered)
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
