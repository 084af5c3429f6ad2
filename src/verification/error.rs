//! Verification error types.

use thiserror::Error;

use crate::extraction::ExtractionError;
use crate::scoring::ScoringError;

/// Errors that stop a verification call before any record is inspected.
///
/// Per-record problems (empty metadata, undecodable harvested records) are never
/// errors; they are counted as unreadable in the report.
#[derive(Debug, Error)]
pub enum VerificationError {
    /// The query was rejected by the scorer.
    #[error(transparent)]
    Scoring(#[from] ScoringError),

    /// The configured noise words could not be compiled.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// A sort label was blank.
    #[error("empty sort label")]
    EmptySortLabel,
}

pub type VerificationResult<T> = Result<T, VerificationError>;
