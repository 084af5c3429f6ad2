//! Metadata extraction: result records to normalized text.
//!
//! Fields are concatenated in a fixed priority order (title, description,
//! keywords, alt text, aria label, data attributes, full visible text), lowercased,
//! stripped of noise tokens and whitespace-collapsed. A record whose fields are all
//! empty yields empty text and is treated as unreadable by the verifier.

pub mod error;
pub mod extractor;
pub mod noise;
pub mod record;


pub use error::{ExtractionError, ExtractionResult};
pub use extractor::{MetadataExtractor, NormalizedText};
pub use noise::{NoiseFilter, is_irrelevant_token};
pub use record::{NO_TITLE, ResultRecord};

/// Extracts a record with the default noise words.
pub fn extract(record: &ResultRecord) -> NormalizedText {
    MetadataExtractor::default().extract(record)
}
