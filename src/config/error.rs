//! Configuration error types.

use thiserror::Error;

use crate::extraction::ExtractionError;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric variable could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    NumberParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// The minimum match percentage could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    PercentageParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// The minimum match percentage is outside `0..=100`.
    #[error("invalid minimum match percentage {value}: must be between 0 and 100")]
    PercentageOutOfRange { value: f64 },

    /// A boolean variable had an unrecognized value.
    #[error("invalid boolean {name}='{value}': expected true/false, 1/0, yes/no or on/off")]
    InvalidBool { name: &'static str, value: String },

    /// The record limit was zero.
    #[error("invalid max records: must be at least 1")]
    ZeroMaxRecords,

    /// The noise-word list could not be compiled.
    #[error("invalid noise words: {source}")]
    InvalidNoiseWords {
        #[source]
        source: ExtractionError,
    },
}
