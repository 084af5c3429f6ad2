//! Query occurrence counting over free page text.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{MIN_BLOCK_CHARS, MIN_BLOCK_TEXT_CHARS};
use crate::extraction::NoiseFilter;
use crate::extraction::is_irrelevant_token;
use crate::extraction::noise::is_measurement_block;
use crate::scoring::fuzz;
use crate::scoring::{Query, Threshold};

/// How often a query appears in a page of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockMatchCount {
    /// Non-overlapping occurrences of the query in the whole text.
    pub exact: usize,
    /// Kept blocks containing the query or fuzzily resembling it.
    pub fuzzy: usize,
    /// Blocks that survived filtering.
    pub kept_blocks: usize,
    /// Non-empty lines in the text.
    pub total_blocks: usize,
}

impl BlockMatchCount {
    /// The larger of the exact and fuzzy counts.
    pub fn count(&self) -> usize {
        self.exact.max(self.fuzzy)
    }
}

/// Counts query occurrences in `text`, line by line.
///
/// Lines are trimmed and dropped when empty, shorter than three characters, all
/// digits, a bare duration or file size, a lone irrelevant token, or when they
/// contain a noise word. Text under five characters counts nothing.
pub fn count_block_matches(
    query: &Query,
    text: &str,
    threshold: Threshold,
    noise: &NoiseFilter,
) -> BlockMatchCount {
    if text.trim().chars().count() < MIN_BLOCK_TEXT_CHARS {
        return BlockMatchCount::default();
    }

    let needle = query.as_str();
    let exact = text.to_lowercase().matches(needle).count();

    let mut counts = BlockMatchCount {
        exact,
        ..Default::default()
    };

    for block in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        counts.total_blocks += 1;
        let lowered = block.to_lowercase();
        if is_filtered(&lowered, needle, noise) {
            continue;
        }
        counts.kept_blocks += 1;

        if lowered.contains(needle) || fuzz::partial_ratio(needle, &lowered) >= threshold.get() {
            counts.fuzzy += 1;
        }
    }

    debug!(
        query = %query,
        exact = counts.exact,
        fuzzy = counts.fuzzy,
        kept = counts.kept_blocks,
        total = counts.total_blocks,
        "Counted block matches"
    );

    counts
}

fn is_filtered(lowered: &str, needle: &str, noise: &NoiseFilter) -> bool {
    if lowered.chars().count() < MIN_BLOCK_CHARS {
        return true;
    }
    if lowered.chars().all(|c| c.is_ascii_digit()) || is_measurement_block(lowered) {
        return true;
    }
    if noise.contains_noise(lowered) {
        return true;
    }
    let single_token = !lowered.contains(char::is_whitespace);
    single_token && !lowered.contains(needle) && is_irrelevant_token(lowered)
}
