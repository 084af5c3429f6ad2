use std::borrow::Borrow;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::constants::PREVIEW_CHARS;
use crate::extraction::{ExtractionError, MetadataExtractor, NO_TITLE, NoiseFilter, ResultRecord};
use crate::scoring::{MatchScorer, Query};

use super::blocks::{BlockMatchCount, count_block_matches};
use super::config::VerifierConfig;
use super::error::VerificationResult;
use super::report::VerificationReport;
use super::types::{Mismatch, MismatchReason};

/// Checks batches of result records against a query.
///
/// A verifier is immutable after construction; every call builds a fresh report,
/// so identical inputs always produce identical reports.
#[derive(Debug, Clone)]
pub struct Verifier {
    config: VerifierConfig,
    noise: NoiseFilter,
    scorer: MatchScorer,
}

impl Verifier {
    /// Compiles the configured noise words.
    pub fn new(config: VerifierConfig) -> VerificationResult<Self> {
        let noise = NoiseFilter::new(&config.noise_words)?;
        let scorer = MatchScorer::new(config.threshold);
        Ok(Self {
            config,
            noise,
            scorer,
        })
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    /// Verifies already-decoded records.
    pub fn verify(&self, query: &str, records: &[ResultRecord]) -> VerificationResult<VerificationReport> {
        let query = Query::new(query)?;
        self.run(&query, records.len(), records.iter().map(Ok))
    }

    /// Verifies records in their harvested JSON form.
    ///
    /// A value that does not decode into a [`ResultRecord`] is counted as unreadable
    /// and the batch continues.
    pub fn verify_harvested(&self, query: &str, records: &[Value]) -> VerificationResult<VerificationReport> {
        let query = Query::new(query)?;
        self.run(&query, records.len(), records.iter().map(ResultRecord::try_from))
    }

    /// Counts how often the query shows up in a block of page text.
    pub fn count_blocks(&self, query: &str, text: &str) -> VerificationResult<BlockMatchCount> {
        let query = Query::new(query)?;
        let noise = self.noise.sparing(&query)?;
        Ok(count_block_matches(&query, text, self.config.threshold, &noise))
    }

    fn run<R, I>(&self, query: &Query, available: usize, records: I) -> VerificationResult<VerificationReport>
    where
        R: Borrow<ResultRecord>,
        I: Iterator<Item = Result<R, ExtractionError>>,
    {
        let max_records = self.config.max_records;
        if available > max_records {
            warn!(
                available,
                max_records, "Batch exceeds record limit, checking the first records only"
            );
        }

        let extractor = MetadataExtractor::new(self.noise.sparing(query)?);
        let threshold = self.config.threshold;

        let mut total_checked = 0;
        let mut matched_count = 0;
        let mut unreadable_count = 0;
        let mut recovered = 0;
        let mut mismatches = Vec::new();
        let mut push_mismatch = |mismatch: Mismatch| {
            if mismatches.len() < self.config.max_mismatches {
                mismatches.push(mismatch);
            }
        };

        for (index, decoded) in records.take(max_records).enumerate() {
            total_checked += 1;

            let record = match decoded {
                Ok(record) => record,
                Err(err) => {
                    warn!(index, error = %err, "Undecodable record counted as unreadable");
                    unreadable_count += 1;
                    push_mismatch(Mismatch {
                        index,
                        title: NO_TITLE.to_string(),
                        score: 0.0,
                        threshold,
                        method: None,
                        preview: String::new(),
                        reason: MismatchReason::Undecodable {
                            detail: err.to_string(),
                        },
                    });
                    continue;
                }
            };
            let record = record.borrow();

            let text = extractor.extract(record);
            if text.is_empty() {
                debug!(index, "No metadata found");
                unreadable_count += 1;
                push_mismatch(Mismatch {
                    index,
                    title: record.display_title().to_string(),
                    score: 0.0,
                    threshold,
                    method: None,
                    preview: preview(record),
                    reason: MismatchReason::NoMetadata,
                });
                continue;
            }

            let result = self.scorer.score(query, &text);
            debug!(
                index,
                is_match = result.is_match,
                score = result.score,
                method = result.method.map(|m| m.as_str()),
                "Record scored"
            );

            if result.is_match {
                matched_count += 1;
                continue;
            }

            if self.config.deep_check && self.details_match(&extractor, query, index, record) {
                matched_count += 1;
                recovered += 1;
                continue;
            }

            push_mismatch(Mismatch {
                index,
                title: record.display_title().to_string(),
                score: result.score,
                threshold,
                method: result.method,
                preview: preview(record),
                reason: MismatchReason::BelowThreshold,
            });
        }

        let report = VerificationReport::new(
            query.to_string(),
            threshold,
            total_checked,
            matched_count,
            unreadable_count,
            recovered,
            mismatches,
        );

        info!(
            query = %query,
            total = report.total_checked,
            matched = report.matched_count,
            unreadable = report.unreadable_count,
            match_percentage = report.match_percentage,
            "Verification complete"
        );

        Ok(report)
    }

    fn details_match(
        &self,
        extractor: &MetadataExtractor,
        query: &Query,
        index: usize,
        record: &ResultRecord,
    ) -> bool {
        let details = extractor.normalize(&record.detail_text);
        if details.is_empty() {
            return false;
        }
        let result = self.scorer.score(query, &details);
        debug!(
            index,
            is_match = result.is_match,
            score = result.score,
            "Details dialog scored"
        );
        result.is_match
    }
}

fn preview(record: &ResultRecord) -> String {
    MetadataExtractor::combine(record)
        .chars()
        .take(PREVIEW_CHARS)
        .collect()
}
