//! Sort-order checks for result lists.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::extraction::ResultRecord;

use super::error::VerificationError;

/// Ordering a result list claims to have, as picked in the sort dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    TitleAscending,
    TitleDescending,
    NewestFirst,
    OldestFirst,
}

impl SortMode {
    /// Interprets a dropdown label such as `"Title (A-Z)"` or `"Date (Newest first)"`.
    ///
    /// Labels mentioning a title sort by title, ascending unless they read Z to A.
    /// Everything else sorts by date, newest first only if the label says so.
    pub fn from_label(label: &str) -> Result<Self, VerificationError> {
        let label = label.trim().to_lowercase();
        if label.is_empty() {
            return Err(VerificationError::EmptySortLabel);
        }

        if label.contains("title") {
            let descending = ["z-a", "z–a", "z→a", "z to a", "descending"]
                .iter()
                .any(|marker| label.contains(marker));
            return Ok(if descending {
                SortMode::TitleDescending
            } else {
                SortMode::TitleAscending
            });
        }

        Ok(if label.contains("newest") {
            SortMode::NewestFirst
        } else {
            SortMode::OldestFirst
        })
    }

    pub fn is_title(&self) -> bool {
        matches!(self, SortMode::TitleAscending | SortMode::TitleDescending)
    }

    fn is_descending(&self) -> bool {
        matches!(self, SortMode::TitleDescending | SortMode::NewestFirst)
    }
}

impl FromStr for SortMode {
    type Err = VerificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortMode::TitleAscending => "title ascending",
            SortMode::TitleDescending => "title descending",
            SortMode::NewestFirst => "newest first",
            SortMode::OldestFirst => "oldest first",
        };
        f.write_str(label)
    }
}

/// Result of a sort-order check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SortCheck {
    /// All `checked` keys are in the expected order.
    Ordered { checked: usize },
    /// Key at `first_violation` sorts before its predecessor.
    Unordered { checked: usize, first_violation: usize },
    /// Fewer than two keys to compare.
    Skipped,
}

impl SortCheck {
    /// Returns `true` unless an ordering violation was found.
    pub fn is_ok(&self) -> bool {
        !matches!(self, SortCheck::Unordered { .. })
    }
}

impl fmt::Display for SortCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortCheck::Ordered { checked } => write!(f, "sorted ({} results checked)", checked),
            SortCheck::Unordered {
                checked,
                first_violation,
            } => write!(
                f,
                "not sorted: result #{} is out of order ({} results checked)",
                first_violation + 1,
                checked
            ),
            SortCheck::Skipped => f.write_str("skipped: not enough data to compare"),
        }
    }
}

/// Checks that records appear in the order `mode` claims.
///
/// Title modes compare non-blank titles case-insensitively. Date modes compare the
/// records that carry a timestamp. Records without a key are ignored.
pub fn verify_sort_order(mode: SortMode, records: &[ResultRecord]) -> SortCheck {
    let check = if mode.is_title() {
        let titles: Vec<String> = records
            .iter()
            .map(|r| r.title.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect();
        check_order(&titles, mode.is_descending())
    } else {
        let timestamps: Vec<i64> = records.iter().filter_map(|r| r.timestamp).collect();
        check_order(&timestamps, mode.is_descending())
    };

    info!(mode = %mode, result = %check, "Sort order checked");
    check
}

fn check_order<K: Ord>(keys: &[K], descending: bool) -> SortCheck {
    if keys.len() < 2 {
        return SortCheck::Skipped;
    }
    let violation = keys.windows(2).position(|pair| {
        if descending {
            pair[0] < pair[1]
        } else {
            pair[0] > pair[1]
        }
    });
    match violation {
        Some(position) => SortCheck::Unordered {
            checked: keys.len(),
            first_violation: position + 1,
        },
        None => SortCheck::Ordered {
            checked: keys.len(),
        },
    }
}
