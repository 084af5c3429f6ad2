//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `SIEVE_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;

use crate::constants::{DEFAULT_MAX_MISMATCHES, DEFAULT_MAX_RECORDS, DEFAULT_NOISE_WORDS};
use crate::extraction::NoiseFilter;
use crate::scoring::Threshold;
use crate::verification::VerifierConfig;

/// Verification settings loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SIEVE_*` overrides on top of defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Fuzzy threshold. Default: `70`. Out-of-range values are clamped.
    pub threshold: Threshold,

    /// Noise words stripped from card metadata. Default: the built-in list.
    pub noise_words: Vec<String>,

    /// Records checked per batch. Default: `150`.
    pub max_records: usize,

    /// Mismatches kept per report. Default: `10`.
    pub max_mismatches: usize,

    /// Score the details dialog of mismatching records. Default: `false`.
    pub deep_check: bool,

    /// Match percentage a batch needs to pass. Default: `100`.
    pub min_match_percentage: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: Threshold::default(),
            noise_words: DEFAULT_NOISE_WORDS.iter().map(|w| w.to_string()).collect(),
            max_records: DEFAULT_MAX_RECORDS,
            max_mismatches: DEFAULT_MAX_MISMATCHES,
            deep_check: false,
            min_match_percentage: 100.0,
        }
    }
}

impl Config {
    const ENV_FUZZY_THRESHOLD: &'static str = "SIEVE_FUZZY_THRESHOLD";
    const ENV_NOISE_WORDS: &'static str = "SIEVE_NOISE_WORDS";
    const ENV_MAX_RECORDS: &'static str = "SIEVE_MAX_RECORDS";
    const ENV_MAX_MISMATCHES: &'static str = "SIEVE_MAX_MISMATCHES";
    const ENV_DEEP_CHECK: &'static str = "SIEVE_DEEP_CHECK";
    const ENV_MIN_MATCH_PERCENTAGE: &'static str = "SIEVE_MIN_MATCH_PERCENTAGE";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let threshold = Self::parse_threshold_from_env(defaults.threshold)?;
        let noise_words = Self::parse_list_from_env(Self::ENV_NOISE_WORDS, defaults.noise_words);
        let max_records = Self::parse_usize_from_env(Self::ENV_MAX_RECORDS, defaults.max_records)?;
        let max_mismatches =
            Self::parse_usize_from_env(Self::ENV_MAX_MISMATCHES, defaults.max_mismatches)?;
        let deep_check = Self::parse_bool_from_env(Self::ENV_DEEP_CHECK, defaults.deep_check)?;
        let min_match_percentage =
            Self::parse_percentage_from_env(defaults.min_match_percentage)?;

        let config = Self {
            threshold,
            noise_words,
            max_records,
            max_mismatches,
            deep_check,
            min_match_percentage,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants that parsing alone does not enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_records == 0 {
            return Err(ConfigError::ZeroMaxRecords);
        }
        if !(0.0..=100.0).contains(&self.min_match_percentage) {
            return Err(ConfigError::PercentageOutOfRange {
                value: self.min_match_percentage,
            });
        }
        NoiseFilter::new(&self.noise_words)
            .map_err(|source| ConfigError::InvalidNoiseWords { source })?;
        Ok(())
    }

    /// Engine settings derived from this configuration.
    pub fn verifier_config(&self) -> VerifierConfig {
        VerifierConfig {
            threshold: self.threshold,
            max_records: self.max_records,
            max_mismatches: self.max_mismatches,
            noise_words: self.noise_words.clone(),
            deep_check: self.deep_check,
        }
    }

    fn parse_threshold_from_env(default: Threshold) -> Result<Threshold, ConfigError> {
        match env::var(Self::ENV_FUZZY_THRESHOLD) {
            Ok(value) => {
                let raw: i64 = value.trim().parse().map_err(|e| ConfigError::NumberParseError {
                    name: Self::ENV_FUZZY_THRESHOLD,
                    value: value.clone(),
                    source: e,
                })?;
                Ok(Threshold::clamped(raw))
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_percentage_from_env(default: f64) -> Result<f64, ConfigError> {
        match env::var(Self::ENV_MIN_MATCH_PERCENTAGE) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::PercentageParseError {
                    name: Self::ENV_MIN_MATCH_PERCENTAGE,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_usize_from_env(var_name: &'static str, default: usize) -> Result<usize, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::NumberParseError {
                    name: var_name,
                    value,
                    source: e,
                }),
            Err(_) => Ok(default),
        }
    }

    fn parse_bool_from_env(var_name: &'static str, default: bool) -> Result<bool, ConfigError> {
        match env::var(var_name) {
            Ok(value) => match value.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" | "" => Ok(false),
                _ => Err(ConfigError::InvalidBool {
                    name: var_name,
                    value,
                }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_list_from_env(var_name: &str, default: Vec<String>) -> Vec<String> {
        env::var(var_name)
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|w| !w.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or(default)
    }
}
