//! Cross-cutting, shared constants.
//!
//! The decision thresholds in the scorer are tuned against real result-card markup
//! (short query embedded in long, noisy card text). Change them together or not at all.

/// Default fuzzy threshold (0..=100) when none is configured.
pub const DEFAULT_FUZZY_THRESHOLD: u8 = 70;

/// Maximum records inspected per verification call.
pub const DEFAULT_MAX_RECORDS: usize = 150;

/// Maximum mismatch entries kept in a report.
pub const DEFAULT_MAX_MISMATCHES: usize = 10;

/// Mismatches rendered by the human-readable summary.
pub const SUMMARY_MISMATCH_LINES: usize = 5;

/// Characters of combined metadata kept as a mismatch preview.
pub const PREVIEW_CHARS: usize = 200;

/// Characters of a title shown in the summary.
pub const SUMMARY_TITLE_CHARS: usize = 60;

/// Score awarded when every word of a multi-word query is present.
pub const ALL_WORDS_SCORE: f64 = 95.0;

/// Minimum share (percent) of query words that must be present for a partial-words match.
pub const PARTIAL_WORDS_MIN_PERCENTAGE: f64 = 70.0;

/// `partial_ratio` at or above this is a match on its own.
pub const PARTIAL_RATIO_MATCH: u8 = 50;

/// `token_sort_ratio` / `token_set_ratio` at or above this is a match.
pub const TOKEN_RATIO_MATCH: u8 = 60;

/// `weighted_ratio` at or above this is a match.
pub const WEIGHTED_RATIO_MATCH: u8 = 60;

/// Final lenient fallback on the best score.
pub const LENIENT_BEST_MATCH: u8 = 50;

/// Text shorter than this (after trimming) carries no blocks worth counting.
pub const MIN_BLOCK_TEXT_CHARS: usize = 5;

/// Blocks shorter than this are skipped by block counting.
pub const MIN_BLOCK_CHARS: usize = 3;

/// Noise words stripped from card metadata unless overridden.
pub const DEFAULT_NOISE_WORDS: &[&str] = &[
    "see details",
    "other",
    "mb",
    "mp4",
    "mkv",
    "avi",
    "mov",
    "mp3",
    "wav",
    "pdf",
    "doc",
    "docx",
    "xls",
    "xlsx",
    "ppt",
    "pptx",
    "zip",
    "jpg",
    "png",
    "avif",
    "svg",
    "tif",
];

/// Generic card labels that never carry search meaning on their own.
pub const GENERIC_LABELS: &[&str] = &["other", "others", "duration", "size", "file", "type"];
