//! Batch verification of search results.
//!
//! A [`Verifier`] runs every record of a batch through extraction and scoring and
//! folds the outcomes into a [`VerificationReport`]. Records without usable
//! metadata are counted as unreadable instead of failing the batch; the only
//! errors are a blank query or an uncompilable noise-word list.
//!
//! Two related checks live here as well: [`count_block_matches`] counts query
//! occurrences in free page text, and [`verify_sort_order`] checks that a result
//! list follows the ordering picked in the UI.

pub mod blocks;
pub mod config;
pub mod error;
pub mod report;
pub mod sorting;
pub mod types;
pub mod verifier;


pub use blocks::{BlockMatchCount, count_block_matches};
pub use config::VerifierConfig;
pub use error::{VerificationError, VerificationResult};
pub use report::VerificationReport;
pub use sorting::{SortCheck, SortMode, verify_sort_order};
pub use types::{Mismatch, MismatchReason};
pub use verifier::Verifier;

use crate::extraction::ResultRecord;

/// Verifies `records` against `query` with default noise words.
///
/// `threshold` is clamped into `0..=100`; at most `max_records` records are checked.
pub fn verify(
    query: &str,
    records: &[ResultRecord],
    threshold: i64,
    max_records: usize,
) -> VerificationResult<VerificationReport> {
    let config = VerifierConfig::default()
        .with_threshold(threshold)
        .with_max_records(max_records);
    Verifier::new(config)?.verify(query, records)
}
