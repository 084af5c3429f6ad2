use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::ExtractionError;

/// Placeholder title for records with nothing title-like.
pub const NO_TITLE: &str = "(no title)";

/// One candidate search result, as scraped from a result card.
///
/// Every text field defaults to empty; `null` is read as empty too. Only the
/// first seven fields feed extraction. `detail_text` is the card's details dialog
/// (consulted by deep check) and `timestamp` is Unix seconds (consulted by sort
/// verification).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResultRecord {
    #[serde(deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(deserialize_with = "nullable_string")]
    pub description: String,
    #[serde(deserialize_with = "nullable_string")]
    pub keywords: String,
    #[serde(deserialize_with = "nullable_string")]
    pub alt_text: String,
    #[serde(deserialize_with = "nullable_string")]
    pub aria_label: String,
    #[serde(deserialize_with = "data_attributes")]
    pub data_attributes: String,
    #[serde(deserialize_with = "nullable_string")]
    pub full_visible_text: String,
    #[serde(deserialize_with = "nullable_string")]
    pub detail_text: String,
    pub timestamp: Option<i64>,
}

impl ResultRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_full_visible_text(mut self, text: impl Into<String>) -> Self {
        self.full_visible_text = text.into();
        self
    }

    pub fn with_detail_text(mut self, text: impl Into<String>) -> Self {
        self.detail_text = text.into();
        self
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// The metadata fields in extraction priority order.
    pub fn fields(&self) -> [&str; 7] {
        [
            self.title.as_str(),
            self.description.as_str(),
            self.keywords.as_str(),
            self.alt_text.as_str(),
            self.aria_label.as_str(),
            self.data_attributes.as_str(),
            self.full_visible_text.as_str(),
        ]
    }

    /// Returns `true` if no metadata field has non-whitespace content.
    pub fn is_blank(&self) -> bool {
        self.fields().iter().all(|f| f.trim().is_empty())
    }

    /// Best guess at a human-readable label: title, description, alt text, aria label.
    pub fn display_title(&self) -> &str {
        [
            self.title.as_str(),
            self.description.as_str(),
            self.alt_text.as_str(),
            self.aria_label.as_str(),
        ]
        .into_iter()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .unwrap_or(NO_TITLE)
    }
}

impl TryFrom<&Value> for ResultRecord {
    type Error = ExtractionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        if !value.is_object() {
            return Err(ExtractionError::NotAnObject {
                found: json_kind(value),
            });
        }
        ResultRecord::deserialize(value).map_err(|source| ExtractionError::Malformed { source })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DataAttributes {
    Text(String),
    Map(BTreeMap<String, Value>),
}

/// Accepts either a pre-serialized string or a `{"data-x": value}` map, rendered as
/// space-separated `key=value` pairs in key order.
fn data_attributes<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let rendered = match Option::<DataAttributes>::deserialize(deserializer)? {
        None => String::new(),
        Some(DataAttributes::Text(text)) => text,
        Some(DataAttributes::Map(map)) => map
            .into_iter()
            .map(|(key, value)| match value {
                Value::String(s) => format!("{}={}", key, s),
                other => format!("{}={}", key, other),
            })
            .collect::<Vec<_>>()
            .join(" "),
    };
    Ok(rendered)
}
