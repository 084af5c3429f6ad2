use tracing::trace;

use crate::constants::{
    ALL_WORDS_SCORE, LENIENT_BEST_MATCH, PARTIAL_RATIO_MATCH, PARTIAL_WORDS_MIN_PERCENTAGE,
    TOKEN_RATIO_MATCH, WEIGHTED_RATIO_MATCH,
};

use crate::extraction::NormalizedText;

use super::fuzz;
use super::types::{MatchMethod, MatchResult, Query, StrategyScores, Threshold};

/// Scores normalized card text against a query.
///
/// Strategies run in a fixed order. The two substring strategies short-circuit;
/// otherwise five fuzzy ratios are computed and OR'd through a ladder of
/// deliberately lenient thresholds, only one of which depends on the configured
/// threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchScorer {
    threshold: Threshold,
}

impl MatchScorer {
    pub fn new(threshold: Threshold) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Scores text that already went through [`MetadataExtractor`] normalization.
    ///
    /// [`MetadataExtractor`]: crate::extraction::MetadataExtractor
    pub fn score(&self, query: &Query, text: &NormalizedText) -> MatchResult {
        let text = text.as_str();
        if text.is_empty() {
            return MatchResult::empty();
        }

        let needle = query.as_str();
        if text.contains(needle) {
            return MatchResult::matched(100.0, MatchMethod::ExactSubstring);
        }

        if let Some(result) = Self::score_words(query, text) {
            return result;
        }

        let scores = Self::strategy_scores(needle, text);
        let (best, method) = scores.best();
        let is_match = self.decide(&scores, best);

        trace!(
            partial = scores.partial_ratio,
            token_sort = scores.token_sort_ratio,
            token_set = scores.token_set_ratio,
            weighted = scores.weighted_ratio,
            plain = scores.plain_ratio,
            is_match,
            "Fuzzy strategy scores"
        );

        MatchResult {
            is_match,
            score: f64::from(best),
            method: Some(method),
        }
    }

    /// Computes all five fuzzy ratios between an already-lowercased query and text.
    pub fn strategy_scores(query: &str, text: &str) -> StrategyScores {
        StrategyScores {
            partial_ratio: fuzz::partial_ratio(query, text),
            token_sort_ratio: fuzz::token_sort_ratio(query, text),
            token_set_ratio: fuzz::token_set_ratio(query, text),
            weighted_ratio: fuzz::weighted_ratio(query, text),
            plain_ratio: fuzz::ratio(query, text),
        }
    }

    fn score_words(query: &Query, text: &str) -> Option<MatchResult> {
        if !query.is_multi_word() {
            return None;
        }

        let words = query.words();
        let found = words.iter().filter(|w| text.contains(w.as_str())).count();

        if found == words.len() {
            return Some(MatchResult::matched(
                ALL_WORDS_SCORE,
                MatchMethod::AllWordsPresent,
            ));
        }

        if found > 0 {
            let percentage = found as f64 / words.len() as f64 * 100.0;
            if percentage >= PARTIAL_WORDS_MIN_PERCENTAGE {
                return Some(MatchResult::matched(
                    percentage,
                    MatchMethod::PartialWordsPresent,
                ));
            }
        }

        None
    }

    fn decide(&self, scores: &StrategyScores, best: u8) -> bool {
        scores.partial_ratio >= PARTIAL_RATIO_MATCH
            || scores.token_sort_ratio >= TOKEN_RATIO_MATCH
            || scores.token_set_ratio >= TOKEN_RATIO_MATCH
            || best >= self.threshold.get()
            || scores.weighted_ratio >= WEIGHTED_RATIO_MATCH
            || best >= LENIENT_BEST_MATCH
    }
}
