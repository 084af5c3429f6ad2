//! Multi-strategy fuzzy scoring of card text against a query.
//!
//! [`MatchScorer::score`] walks the strategies in a fixed order:
//!
//! 1. exact substring (score 100)
//! 2. all words of a multi-word query present (score 95), or at least 70% of them
//! 3. five fuzzy ratios from [`fuzz`]: partial, token sort, token set, weighted, plain
//!
//! In step 3 the reported score is the maximum ratio and the method is the first
//! strategy (in the order above) that reached it. The match decision is an OR of
//! lenient per-strategy thresholds; see [`MatchScorer`].

pub mod error;
pub mod fuzz;
pub mod scorer;
pub mod types;


use crate::extraction::{MetadataExtractor, NoiseFilter};

pub use error::{ScoringError, ScoringResult};
pub use scorer::MatchScorer;
pub use types::{MatchMethod, MatchResult, Query, StrategyScores, Threshold};

/// Scores raw `text` against `query` in one call.
///
/// The text is lowercased and stripped of default noise words (except those the
/// query uses) before scoring. `threshold` is clamped into `0..=100`. Fails only
/// when `query` is blank.
pub fn score(query: &str, text: &str, threshold: i64) -> ScoringResult<MatchResult> {
    let query = Query::new(query)?;
    // A subset of the default words, which already compiled.
    let noise = NoiseFilter::default().sparing(&query).unwrap_or_default();
    let text = MetadataExtractor::new(noise).normalize(text);
    Ok(MatchScorer::new(Threshold::clamped(threshold)).score(&query, &text))
}
