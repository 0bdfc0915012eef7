//! Quote domain errors.

use std::fmt;

/// Errors raised by quote operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// No quote matches the requested id.
    NotFound {
        /// The id as it was requested, before parsing.
        id: String,
    },
}

impl QuoteError {
    /// Create a not-found error for a requested id.
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}

impl fmt::Display for QuoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { id } => write!(f, "Quote not found: {id}"),
        }
    }
}

impl std::error::Error for QuoteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = QuoteError::not_found("abc");
        assert_eq!(err.to_string(), "Quote not found: abc");
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(QuoteError::not_found("1"));
        assert!(!err.to_string().is_empty());
    }
}
