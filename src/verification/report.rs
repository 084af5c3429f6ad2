use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{SUMMARY_MISMATCH_LINES, SUMMARY_TITLE_CHARS};
use crate::scoring::Threshold;

use super::types::{Mismatch, MismatchReason};

/// Outcome of verifying one batch of records against a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    /// Normalized query the batch was checked against.
    pub query: String,
    pub threshold: Threshold,
    /// Records inspected, unreadable ones included.
    pub total_checked: usize,
    pub matched_count: usize,
    /// Records with no usable metadata or that failed to decode.
    pub unreadable_count: usize,
    /// `matched_count / total_checked * 100`, or `0` for an empty batch.
    pub match_percentage: f64,
    /// Matches that only succeeded on the details dialog.
    pub recovered_by_deep_check: usize,
    /// First mismatches in encounter order, capped by configuration.
    pub mismatches: Vec<Mismatch>,
}

impl VerificationReport {
    pub(crate) fn new(
        query: String,
        threshold: Threshold,
        total_checked: usize,
        matched_count: usize,
        unreadable_count: usize,
        recovered_by_deep_check: usize,
        mismatches: Vec<Mismatch>,
    ) -> Self {
        let match_percentage = percentage(matched_count, total_checked);
        Self {
            query,
            threshold,
            total_checked,
            matched_count,
            unreadable_count,
            match_percentage,
            recovered_by_deep_check,
            mismatches,
        }
    }

    pub fn unmatched_count(&self) -> usize {
        self.total_checked - self.matched_count
    }

    /// Returns `true` if at least one record was checked and all of them matched.
    pub fn all_matched(&self) -> bool {
        self.total_checked > 0 && self.matched_count == self.total_checked
    }

    /// Returns `true` if no record was unreadable.
    pub fn is_clean(&self) -> bool {
        self.unreadable_count == 0
    }

    /// Pass criterion: no unreadable records and a match percentage of at least `min_percentage`.
    pub fn passes(&self, min_percentage: f64) -> bool {
        self.is_clean() && self.total_checked > 0 && self.match_percentage >= min_percentage
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

fn shorten(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max_chars).collect();
    short.push_str("...");
    short
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Keyword verification for \"{}\"", self.query)?;
        writeln!(f, "  Total results checked: {}", self.total_checked)?;
        writeln!(
            f,
            "  Matched: {} ({:.1}%)",
            self.matched_count, self.match_percentage
        )?;
        writeln!(
            f,
            "  Unmatched: {} ({:.1}%)",
            self.unmatched_count(),
            percentage(self.unmatched_count(), self.total_checked)
        )?;
        if self.unreadable_count > 0 {
            writeln!(f, "  Unreadable: {}", self.unreadable_count)?;
        }
        if self.recovered_by_deep_check > 0 {
            writeln!(
                f,
                "  Matched via details dialog: {}",
                self.recovered_by_deep_check
            )?;
        }
        writeln!(f, "  Fuzzy threshold: {}", self.threshold)?;

        if self.all_matched() {
            return write!(f, "  All results contain the keyword");
        }
        if self.mismatches.is_empty() {
            return write!(f, "  No results to show");
        }

        write!(f, "  Mismatches:")?;
        for mismatch in self.mismatches.iter().take(SUMMARY_MISMATCH_LINES) {
            let title = shorten(&mismatch.title, SUMMARY_TITLE_CHARS);
            match (&mismatch.reason, mismatch.method) {
                (MismatchReason::BelowThreshold, Some(method)) => write!(
                    f,
                    "\n    #{} \"{}\" score {:.0}% via {}",
                    mismatch.index + 1,
                    title,
                    mismatch.score,
                    method
                )?,
                (reason, _) => write!(f, "\n    #{} \"{}\" {}", mismatch.index + 1, title, reason)?,
            }
        }
        let hidden = self.unmatched_count().saturating_sub(SUMMARY_MISMATCH_LINES);
        if hidden > 0 {
            write!(f, "\n    ... and {} more", hidden)?;
        }
        Ok(())
    }
}
