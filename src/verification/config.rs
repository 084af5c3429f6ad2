use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_MISMATCHES, DEFAULT_MAX_RECORDS, DEFAULT_NOISE_WORDS};
use crate::scoring::Threshold;

/// Engine settings for one [`Verifier`](super::Verifier).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Fuzzy threshold. Default: `70`.
    pub threshold: Threshold,

    /// Records inspected per call; the rest are ignored. Default: `150`.
    pub max_records: usize,

    /// Mismatch entries kept in a report, first by encounter order. Default: `10`.
    pub max_mismatches: usize,

    /// Noise words stripped from metadata. Durations and file sizes are always stripped.
    pub noise_words: Vec<String>,

    /// Score a record's details dialog when its metadata does not match. Default: `false`.
    pub deep_check: bool,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::default(),
            max_records: DEFAULT_MAX_RECORDS,
            max_mismatches: DEFAULT_MAX_MISMATCHES,
            noise_words: DEFAULT_NOISE_WORDS.iter().map(|w| w.to_string()).collect(),
            deep_check: false,
        }
    }
}

impl VerifierConfig {
    /// Sets the threshold, clamping it into `0..=100`.
    pub fn with_threshold(mut self, threshold: i64) -> Self {
        self.threshold = Threshold::clamped(threshold);
        self
    }

    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = max_records;
        self
    }

    pub fn with_max_mismatches(mut self, max_mismatches: usize) -> Self {
        self.max_mismatches = max_mismatches;
        self
    }

    pub fn with_noise_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.noise_words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_deep_check(mut self, enabled: bool) -> Self {
        self.deep_check = enabled;
        self
    }
}
