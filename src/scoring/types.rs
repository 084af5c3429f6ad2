use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::DEFAULT_FUZZY_THRESHOLD;

use super::error::{ScoringError, ScoringResult};

/// A validated search query: trimmed, lowercased, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    text: String,
    words: Vec<String>,
}

impl Query {
    /// Normalizes `raw` and rejects it if nothing is left.
    pub fn new(raw: &str) -> ScoringResult<Self> {
        let text = raw.trim().to_lowercase();
        if text.is_empty() {
            return Err(ScoringError::EmptyQuery);
        }
        let words = text.split_whitespace().map(str::to_string).collect();
        Ok(Self { text, words })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whitespace-separated words of the query.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_multi_word(&self) -> bool {
        self.words.len() > 1
    }

    /// Returns `true` if `phrase` occurs in the query as a whole word (or word sequence).
    pub fn contains_phrase(&self, phrase: &str) -> bool {
        let padded = format!(" {} ", self.words.join(" "));
        padded.contains(&format!(" {} ", phrase.trim()))
    }
}

impl std::str::FromStr for Query {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Similarity threshold in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Threshold(u8);

impl Threshold {
    pub const MAX: u8 = 100;

    /// Returns `None` if `value` exceeds 100.
    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    /// Clamps `value` into `0..=100`, logging a warning if it was out of range.
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(0, i64::from(Self::MAX));
        if clamped != value {
            warn!(
                requested = value,
                clamped = clamped,
                "Fuzzy threshold out of range, clamping"
            );
        }
        Self(clamped as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_FUZZY_THRESHOLD)
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Strategy that produced a match score, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMethod {
    ExactSubstring,
    AllWordsPresent,
    PartialWordsPresent,
    PartialRatio,
    TokenSortRatio,
    TokenSetRatio,
    WeightedRatio,
    PlainRatio,
}

impl MatchMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMethod::ExactSubstring => "exact_match",
            MatchMethod::AllWordsPresent => "all_words_match",
            MatchMethod::PartialWordsPresent => "partial_words_match",
            MatchMethod::PartialRatio => "partial_ratio",
            MatchMethod::TokenSortRatio => "token_sort_ratio",
            MatchMethod::TokenSetRatio => "token_set_ratio",
            MatchMethod::WeightedRatio => "WRatio",
            MatchMethod::PlainRatio => "ratio",
        }
    }
}

impl std::fmt::Display for MatchMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Outcome of scoring one normalized text against a query.
pub struct MatchResult {
    /// Whether the text counts as containing the query.
    pub is_match: bool,
    /// Best score observed, `0..=100`.
    pub score: f64,
    /// Strategy that produced `score`. `None` only for empty text.
    pub method: Option<MatchMethod>,
}

impl MatchResult {
    /// Result for empty text: no strategy ran.
    pub fn empty() -> Self {
        Self {
            is_match: false,
            score: 0.0,
            method: None,
        }
    }

    pub(crate) fn matched(score: f64, method: MatchMethod) -> Self {
        Self {
            is_match: true,
            score,
            method: Some(method),
        }
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.is_match { "MATCH" } else { "NO MATCH" };
        match self.method {
            Some(method) => write!(f, "{} (score: {:.0}% via {})", verdict, self.score, method),
            None => write!(f, "{} (no text)", verdict),
        }
    }
}

/// The five similarity scores computed when neither substring strategy decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyScores {
    pub partial_ratio: u8,
    pub token_sort_ratio: u8,
    pub token_set_ratio: u8,
    pub weighted_ratio: u8,
    pub plain_ratio: u8,
}

impl StrategyScores {
    /// Highest score and the strategy that produced it. Ties go to the earlier strategy.
    pub fn best(&self) -> (u8, MatchMethod) {
        let ordered = [
            (self.partial_ratio, MatchMethod::PartialRatio),
            (self.token_sort_ratio, MatchMethod::TokenSortRatio),
            (self.token_set_ratio, MatchMethod::TokenSetRatio),
            (self.weighted_ratio, MatchMethod::WeightedRatio),
            (self.plain_ratio, MatchMethod::PlainRatio),
        ];

        let mut best = ordered[0];
        for candidate in &ordered[1..] {
            if candidate.0 > best.0 {
                best = *candidate;
            }
        }
        best
    }
}
