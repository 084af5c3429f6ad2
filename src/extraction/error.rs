//! Extraction error types.

use thiserror::Error;

/// Errors raised while decoding harvested records or building noise filters.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Harvested record was not a JSON object.
    #[error("harvested record is not an object (found {found})")]
    NotAnObject { found: &'static str },

    /// Harvested record had fields of the wrong shape.
    #[error("malformed harvested record: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },

    /// Noise-word pattern could not be compiled.
    #[error("invalid noise word pattern: {source}")]
    NoisePattern {
        #[source]
        source: regex::Error,
    },
}

pub type ExtractionResult<T> = Result<T, ExtractionError>;
