//! Sieve: fuzzy keyword-match verification for search results.
//!
//! Given a query and the result cards a search UI rendered for it, sieve decides
//! which cards plausibly contain the query and reports the rest. Typos, partial
//! words, reordered words and noise tokens (file extensions, durations, sizes,
//! generic labels) are tolerated.
//!
//! # Modules
//!
//! - [`extraction`]: [`ResultRecord`] metadata to [`NormalizedText`]
//! - [`scoring`]: multi-strategy fuzzy [`MatchScorer`]
//! - [`verification`]: batch [`Verifier`] and its [`VerificationReport`], plus block
//!   counting and sort-order checks
//! - [`config`]: `SIEVE_*` environment configuration
//!
//! # Example
//!
//! ```
//! use sieve::{ResultRecord, Verifier, VerifierConfig};
//!
//! let records = vec![
//!     ResultRecord::new().with_title("Breaking News Today"),
//!     ResultRecord::new().with_title("Weather Update"),
//! ];
//! let verifier = Verifier::new(VerifierConfig::default()).unwrap();
//! let report = verifier.verify("news", &records).unwrap();
//!
//! assert_eq!(report.matched_count, 1);
//! assert_eq!(report.mismatches[0].title, "Weather Update");
//! ```

pub mod config;
pub mod constants;
pub mod extraction;
pub mod scoring;
pub mod verification;

pub use config::{Config, ConfigError};
pub use extraction::{
    ExtractionError, ExtractionResult, MetadataExtractor, NO_TITLE, NoiseFilter, NormalizedText,
    ResultRecord, extract, is_irrelevant_token,
};
pub use scoring::{
    MatchMethod, MatchResult, MatchScorer, Query, ScoringError, ScoringResult, StrategyScores,
    Threshold, score,
};
pub use verification::{
    BlockMatchCount, Mismatch, MismatchReason, SortCheck, SortMode, VerificationError,
    VerificationReport, VerificationResult, Verifier, VerifierConfig, count_block_matches, verify,
    verify_sort_order,
};
