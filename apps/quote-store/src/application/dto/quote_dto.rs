//! Quote DTOs

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::quote::{Quote, QuoteContent};

/// Deserialize a field that is present in the input, keeping `null` as
/// `Some(Value::Null)`. Absent fields fall back to `None` via `default`.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// DTO carrying the caller-supplied fields for create and update.
///
/// Keys other than `text` and `author` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuoteInputDto {
    /// Text, any JSON value.
    #[serde(default, deserialize_with = "present_value")]
    pub text: Option<Value>,
    /// Author, any JSON value.
    #[serde(default, deserialize_with = "present_value")]
    pub author: Option<Value>,
}

impl QuoteInputDto {
    /// Convert to domain content.
    #[must_use]
    pub fn into_content(self) -> QuoteContent {
        QuoteContent {
            text: self.text,
            author: self.author,
        }
    }
}

/// DTO representing a stored quote.
///
/// Absent fields are omitted from the JSON; explicit `null`s are kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteDto {
    /// Quote id.
    pub id: u64,
    /// Text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Value>,
    /// Author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Value>,
}

impl QuoteDto {
    /// Create from domain Quote.
    #[must_use]
    pub fn from_quote(quote: &Quote) -> Self {
        Self {
            id: quote.id().value(),
            text: quote.text().cloned(),
            author: quote.author().cloned(),
        }
    }
}
