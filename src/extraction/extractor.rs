use super::noise::{NoiseFilter, collapse_whitespace};
use super::record::ResultRecord;

/// Lowercased, noise-stripped, whitespace-collapsed metadata text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Turns a [`ResultRecord`] into one normalized text blob.
#[derive(Debug, Clone, Default)]
pub struct MetadataExtractor {
    noise: NoiseFilter,
}

impl MetadataExtractor {
    pub fn new(noise: NoiseFilter) -> Self {
        Self { noise }
    }

    pub fn noise(&self) -> &NoiseFilter {
        &self.noise
    }

    /// Non-empty fields joined by spaces, in priority order, without normalization.
    pub fn combine(record: &ResultRecord) -> String {
        let combined = record
            .fields()
            .into_iter()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        collapse_whitespace(&combined)
    }

    pub fn extract(&self, record: &ResultRecord) -> NormalizedText {
        self.normalize(&Self::combine(record))
    }

    /// Normalizes free text (e.g. a details dialog) the same way as record metadata.
    pub fn normalize(&self, text: &str) -> NormalizedText {
        if text.trim().is_empty() {
            return NormalizedText::default();
        }
        NormalizedText(self.noise.strip(&text.to_lowercase()))
    }
}
