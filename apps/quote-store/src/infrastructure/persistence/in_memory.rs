//! In-memory quote repository.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::quote::{
    IdAllocator, IdStrategy, Quote, QuoteContent, QuoteError, QuoteId, QuoteRepository,
};

/// The collection and its id allocator, guarded together so allocation and
/// append happen atomically.
#[derive(Debug)]
struct QuoteTable {
    quotes: Vec<Quote>,
    ids: IdAllocator,
}

/// In-memory implementation of `QuoteRepository`.
///
/// Holds quotes in insertion order. Every lookup is a linear scan returning
/// the first match. Contents are lost when the process exits.
#[derive(Debug)]
pub struct InMemoryQuoteRepository {
    table: RwLock<QuoteTable>,
}

impl Default for InMemoryQuoteRepository {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}

impl InMemoryQuoteRepository {
    /// Create a new empty repository using the given id strategy.
    #[must_use]
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            table: RwLock::new(QuoteTable {
                quotes: Vec::new(),
                ids: IdAllocator::new(strategy),
            }),
        }
    }

    /// Get the number of quotes in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.read().quotes.len()
    }

    /// Check if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.read().quotes.is_empty()
    }

    /// Remove every quote and restart id allocation.
    pub fn clear(&self) {
        let mut table = self.table.write();
        table.quotes.clear();
        table.ids.reset();
    }
}

#[async_trait]
impl QuoteRepository for InMemoryQuoteRepository {
    async fn insert(&self, content: QuoteContent) -> Result<Quote, QuoteError> {
        let mut table = self.table.write();
        let current_len = table.quotes.len();
        let id = table.ids.allocate(current_len);
        let quote = Quote::new(id, content);
        table.quotes.push(quote.clone());
        Ok(quote)
    }

    async fn find_all(&self) -> Result<Vec<Quote>, QuoteError> {
        Ok(self.table.read().quotes.clone())
    }

    async fn find_by_id(&self, id: QuoteId) -> Result<Option<Quote>, QuoteError> {
        let table = self.table.read();
        Ok(table.quotes.iter().find(|q| q.id() == id).cloned())
    }

    async fn replace(&self, id: QuoteId, content: QuoteContent) -> Result<Quote, QuoteError> {
        let mut table = self.table.write();
        let quote = table
            .quotes
            .iter_mut()
            .find(|q| q.id() == id)
            .ok_or_else(|| QuoteError::not_found(id.to_string()))?;
        quote.replace_content(content);
        Ok(quote.clone())
    }

    async fn delete(&self, id: QuoteId) -> Result<Quote, QuoteError> {
        let mut table = self.table.write();
        let index = table
            .quotes
            .iter()
            .position(|q| q.id() == id)
            .ok_or_else(|| QuoteError::not_found(id.to_string()))?;
        Ok(table.quotes.remove(index))
    }

    async fn count(&self) -> Result<usize, QuoteError> {
        Ok(self.len())
    }
}
