use serde::{Deserialize, Serialize};

use crate::scoring::{MatchMethod, Threshold};

/// Why a record ended up in the mismatch list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MismatchReason {
    /// Every metadata field was empty, or only noise.
    NoMetadata,
    /// The harvested record could not be decoded.
    Undecodable { detail: String },
    /// The record was scored and did not match.
    BelowThreshold,
}

impl MismatchReason {
    /// Returns `true` for reasons that count the record as unreadable.
    pub fn is_unreadable(&self) -> bool {
        !matches!(self, MismatchReason::BelowThreshold)
    }
}

impl std::fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MismatchReason::NoMetadata => f.write_str("no metadata found"),
            MismatchReason::Undecodable { detail } => write!(f, "undecodable record: {}", detail),
            MismatchReason::BelowThreshold => f.write_str("below threshold"),
        }
    }
}

/// One record that did not count as a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mismatch {
    /// Zero-based position of the record in the input batch.
    pub index: usize,
    /// Best-guess title (title, description, alt text, aria label, or `(no title)`).
    pub title: String,
    /// Best score reached; `0` for unreadable records.
    pub score: f64,
    /// Threshold in force for the call.
    pub threshold: Threshold,
    /// Strategy behind `score`; absent for unreadable records.
    pub method: Option<MatchMethod>,
    /// Leading characters of the raw combined metadata.
    pub preview: String,
    pub reason: MismatchReason,
}
