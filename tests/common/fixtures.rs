//! Test fixtures for integration tests.

use serde_json::{Value, json};
use sieve::ResultRecord;

pub const DEFAULT_QUERY: &str = "election results";

pub const FIXED_TIMESTAMP: i64 = 1702512000;

#[derive(Default)]
pub struct ResultRecordBuilder {
    title: Option<String>,
    description: Option<String>,
    keywords: Option<String>,
    alt_text: Option<String>,
    aria_label: Option<String>,
    data_attributes: Option<String>,
    full_visible_text: Option<String>,
    detail_text: Option<String>,
    timestamp: Option<i64>,
}

impl ResultRecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn keywords(mut self, keywords: &str) -> Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    pub fn alt_text(mut self, alt_text: &str) -> Self {
        self.alt_text = Some(alt_text.to_string());
        self
    }

    pub fn aria_label(mut self, aria_label: &str) -> Self {
        self.aria_label = Some(aria_label.to_string());
        self
    }

    pub fn data_attributes(mut self, data_attributes: &str) -> Self {
        self.data_attributes = Some(data_attributes.to_string());
        self
    }

    pub fn full_visible_text(mut self, text: &str) -> Self {
        self.full_visible_text = Some(text.to_string());
        self
    }

    pub fn detail_text(mut self, text: &str) -> Self {
        self.detail_text = Some(text.to_string());
        self
    }

    pub fn timestamp(mut self, ts: i64) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Typical media card: title, duration and size badges, file type label.
    pub fn with_media_card(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self.full_visible_text = Some(format!("{} 12:34 45.2 MB mp4 See details", title));
        self
    }

    pub fn build(self) -> ResultRecord {
        ResultRecord {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            keywords: self.keywords.unwrap_or_default(),
            alt_text: self.alt_text.unwrap_or_default(),
            aria_label: self.aria_label.unwrap_or_default(),
            data_attributes: self.data_attributes.unwrap_or_default(),
            full_visible_text: self.full_visible_text.unwrap_or_default(),
            detail_text: self.detail_text.unwrap_or_default(),
            timestamp: self.timestamp,
        }
    }
}

/// Media cards that all contain `query` in their title.
pub fn create_matching_batch(query: &str, count: usize) -> Vec<ResultRecord> {
    (0..count)
        .map(|i| {
            ResultRecordBuilder::new()
                .with_media_card(&format!("Clip {} about {}", i, query))
                .build()
        })
        .collect()
}

/// Records with timestamps spaced `interval_seconds` apart, oldest first.
pub fn create_time_series_records(interval_seconds: i64, count: usize) -> Vec<ResultRecord> {
    (0..count)
        .map(|i| {
            ResultRecordBuilder::new()
                .title(&format!("Report {}", i))
                .timestamp(FIXED_TIMESTAMP + i as i64 * interval_seconds)
                .build()
        })
        .collect()
}

/// A record as a browser harvester would hand it over.
pub fn harvested_card(title: &str, visible_text: &str) -> Value {
    json!({
        "title": title,
        "description": null,
        "altText": "",
        "dataAttributes": {"data-type": "video"},
        "fullVisibleText": visible_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let record = ResultRecordBuilder::new().build();

        assert_eq!(record, ResultRecord::default());
        assert!(record.is_blank());
    }

    #[test]
    fn test_media_card_has_noise() {
        let record = ResultRecordBuilder::new().with_media_card("Budget Vote").build();

        assert_eq!(record.title, "Budget Vote");
        assert!(record.full_visible_text.contains("mp4"));
    }
}
