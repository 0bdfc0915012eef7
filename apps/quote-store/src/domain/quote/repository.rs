//! Quote Repository Trait
//!
//! Defines the storage abstraction for quotes.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::entity::{Quote, QuoteContent};
use super::errors::QuoteError;
use super::identifiers::QuoteId;

/// Repository trait for the quote collection.
///
/// The collection is ordered by insertion. Lookups by id resolve to the first
/// quote in that order carrying the id.
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// Allocate an id, append a new quote, and return it.
    ///
    /// # Errors
    ///
    /// Returns error if the store rejects the write.
    async fn insert(&self, content: QuoteContent) -> Result<Quote, QuoteError>;

    /// Return every quote in insertion order.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_all(&self) -> Result<Vec<Quote>, QuoteError>;

    /// Find the first quote with the given id.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_id(&self, id: QuoteId) -> Result<Option<Quote>, QuoteError>;

    /// Overwrite the content of the first quote with the given id.
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::NotFound` if no quote has the id.
    async fn replace(&self, id: QuoteId, content: QuoteContent) -> Result<Quote, QuoteError>;

    /// Remove the first quote with the given id and return it.
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::NotFound` if no quote has the id.
    async fn delete(&self, id: QuoteId) -> Result<Quote, QuoteError>;

    /// Number of stored quotes.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn count(&self) -> Result<usize, QuoteError>;
}
