//! Quote entity.

use serde_json::Value;

use super::identifiers::QuoteId;

/// Caller-supplied fields of a quote.
///
/// Values are stored exactly as received. `None` means the field was absent,
/// which is distinct from an explicit JSON `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteContent {
    /// Quote text.
    pub text: Option<Value>,
    /// Quote author.
    pub author: Option<Value>,
}

impl QuoteContent {
    /// Create content from text and author strings.
    #[must_use]
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: Some(Value::String(text.into())),
            author: Some(Value::String(author.into())),
        }
    }
}

/// A stored quote.
///
/// The id is fixed at construction; only the content can change.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    id: QuoteId,
    content: QuoteContent,
}

impl Quote {
    /// Create a quote with an already allocated id.
    #[must_use]
    pub const fn new(id: QuoteId, content: QuoteContent) -> Self {
        Self { id, content }
    }

    /// Get the id.
    #[must_use]
    pub const fn id(&self) -> QuoteId {
        self.id
    }

    /// Get the text.
    #[must_use]
    pub const fn text(&self) -> Option<&Value> {
        self.content.text.as_ref()
    }

    /// Get the author.
    #[must_use]
    pub const fn author(&self) -> Option<&Value> {
        self.content.author.as_ref()
    }

    /// Get the full content.
    #[must_use]
    pub const fn content(&self) -> &QuoteContent {
        &self.content
    }

    /// Overwrite text and author in place. Absent fields in `content` clear
    /// the corresponding field.
    pub fn replace_content(&mut self, content: QuoteContent) {
        self.content = content;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn replace_content_keeps_id() {
        let mut quote = Quote::new(QuoteId::new(4), QuoteContent::new("A", "B"));

        quote.replace_content(QuoteContent::new("C", "D"));

        assert_eq!(quote.id(), QuoteId::new(4));
        assert_eq!(quote.text(), Some(&json!("C")));
        assert_eq!(quote.author(), Some(&json!("D")));
    }

    #[test]
    fn replace_with_absent_fields_clears_them() {
        let mut quote = Quote::new(QuoteId::new(1), QuoteContent::new("A", "B"));

        quote.replace_content(QuoteContent {
            text: Some(json!("only text")),
            author: None,
        });

        assert_eq!(quote.text(), Some(&json!("only text")));
        assert!(quote.author().is_none());
    }

    #[test]
    fn content_keeps_non_string_values() {
        let content = QuoteContent {
            text: Some(json!(42)),
            author: Some(Value::Null),
        };
        let quote = Quote::new(QuoteId::new(1), content.clone());
        assert_eq!(quote.content(), &content);
    }
}
