//! Id allocation strategies.
//!
//! `Sequence` hands out ids from a counter that never goes backwards, so ids
//! stay unique for the life of the process. `CollectionLength` reproduces the
//! older `count + 1` rule: after a delete, the next create can reuse an id
//! still held by another quote.

use std::fmt;

use super::identifiers::QuoteId;

/// How the store assigns ids to new quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// Monotonic counter, ids are never reused.
    #[default]
    Sequence,
    /// `current count + 1`; may duplicate ids after deletes.
    CollectionLength,
}

impl IdStrategy {
    /// Parse a strategy name (`sequence` or `length`), ignoring case.
    #[must_use]
    pub fn from_str_case_insensitive(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sequence" => Some(Self::Sequence),
            "length" => Some(Self::CollectionLength),
            _ => None,
        }
    }

    /// Get the configuration name of the strategy.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sequence => "sequence",
            Self::CollectionLength => "length",
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Allocates ids according to an [`IdStrategy`].
///
/// Must be driven under the same lock as the collection it allocates for.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    strategy: IdStrategy,
    last_issued: u64,
}

impl IdAllocator {
    /// Create an allocator that has issued nothing yet.
    #[must_use]
    pub const fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            last_issued: 0,
        }
    }

    /// Allocate the id for a quote about to be appended to a collection
    /// currently holding `current_len` quotes.
    pub fn allocate(&mut self, current_len: usize) -> QuoteId {
        let next = match self.strategy {
            IdStrategy::Sequence => self.last_issued + 1,
            IdStrategy::CollectionLength => current_len as u64 + 1,
        };
        self.last_issued = next;
        QuoteId::new(next)
    }

    /// Forget every issued id.
    pub fn reset(&mut self) {
        self.last_issued = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_parsing() {
        assert_eq!(
            IdStrategy::from_str_case_insensitive("sequence"),
            Some(IdStrategy::Sequence)
        );
        assert_eq!(
            IdStrategy::from_str_case_insensitive("LENGTH"),
            Some(IdStrategy::CollectionLength)
        );
        assert_eq!(
            IdStrategy::from_str_case_insensitive(" Sequence "),
            Some(IdStrategy::Sequence)
        );
        assert_eq!(IdStrategy::from_str_case_insensitive("uuid"), None);
    }

    #[test]
    fn default_is_sequence() {
        assert_eq!(IdStrategy::default(), IdStrategy::Sequence);
    }

    #[test]
    fn sequence_ignores_collection_size() {
        let mut ids = IdAllocator::new(IdStrategy::Sequence);
        assert_eq!(ids.allocate(0), QuoteId::new(1));
        assert_eq!(ids.allocate(1), QuoteId::new(2));
        // Two quotes deleted in between.
        assert_eq!(ids.allocate(0), QuoteId::new(3));
    }

    #[test]
    fn collection_length_follows_size() {
        let mut ids = IdAllocator::new(IdStrategy::CollectionLength);
        assert_eq!(ids.allocate(0), QuoteId::new(1));
        assert_eq!(ids.allocate(1), QuoteId::new(2));
        assert_eq!(ids.allocate(1), QuoteId::new(2));
    }

    #[test]
    fn reset_restarts_sequence() {
        let mut ids = IdAllocator::new(IdStrategy::Sequence);
        ids.allocate(0);
        ids.allocate(1);
        ids.reset();
        assert_eq!(ids.allocate(0), QuoteId::new(1));
    }
}
