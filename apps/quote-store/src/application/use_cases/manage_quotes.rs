//! Manage Quotes Use Case
//!
//! Create, list, fetch, replace and delete quotes. Ids arrive as raw path
//! segments; one that does not parse is reported exactly like one that parses
//! but matches nothing.

use std::sync::Arc;

use crate::application::dto::{QuoteDto, QuoteInputDto};
use crate::domain::quote::{QuoteError, QuoteId, QuoteRepository};
use crate::observability::{Outcome, QuoteOperation, record_quote_operation, set_quotes_stored};

/// Use case for the quote CRUD operations.
pub struct ManageQuotesUseCase<R>
where
    R: QuoteRepository,
{
    quote_repo: Arc<R>,
}

impl<R> ManageQuotesUseCase<R>
where
    R: QuoteRepository,
{
    /// Create a new `ManageQuotesUseCase`.
    pub const fn new(quote_repo: Arc<R>) -> Self {
        Self { quote_repo }
    }

    /// Store a new quote. Never fails for a store that accepts writes; the
    /// input is not validated.
    pub async fn create(&self, input: QuoteInputDto) -> Result<QuoteDto, QuoteError> {
        let result = self.quote_repo.insert(input.into_content()).await;
        record_quote_operation(QuoteOperation::Create, Outcome::of(&result));
        let quote = result?;

        tracing::info!(quote_id = %quote.id(), "Quote created");
        self.refresh_stored_gauge().await;

        Ok(QuoteDto::from_quote(&quote))
    }

    /// List every quote in insertion order.
    pub async fn list(&self) -> Result<Vec<QuoteDto>, QuoteError> {
        let result = self.quote_repo.find_all().await;
        record_quote_operation(QuoteOperation::List, Outcome::of(&result));
        let quotes = result?;

        tracing::debug!(count = quotes.len(), "Quotes listed");
        Ok(quotes.iter().map(QuoteDto::from_quote).collect())
    }

    /// Fetch the first quote matching `raw_id`.
    pub async fn get(&self, raw_id: &str) -> Result<QuoteDto, QuoteError> {
        let result = self.find(raw_id).await;
        record_quote_operation(QuoteOperation::Get, Outcome::of(&result));
        result
    }

    /// Overwrite text and author of the first quote matching `raw_id`.
    pub async fn update(&self, raw_id: &str, input: QuoteInputDto) -> Result<QuoteDto, QuoteError> {
        let result = match parse_id(raw_id) {
            Ok(id) => self
                .quote_repo
                .replace(id, input.into_content())
                .await
                .map_err(|e| report_raw_id(e, raw_id)),
            Err(e) => Err(e),
        };
        record_quote_operation(QuoteOperation::Update, Outcome::of(&result));

        match result {
            Ok(quote) => {
                tracing::info!(quote_id = %quote.id(), "Quote updated");
                Ok(QuoteDto::from_quote(&quote))
            }
            Err(e) => {
                tracing::debug!(raw_id, "Quote to update not found");
                Err(e)
            }
        }
    }

    /// Remove the first quote matching `raw_id`.
    pub async fn delete(&self, raw_id: &str) -> Result<(), QuoteError> {
        let result = match parse_id(raw_id) {
            Ok(id) => self
                .quote_repo
                .delete(id)
                .await
                .map_err(|e| report_raw_id(e, raw_id)),
            Err(e) => Err(e),
        };
        record_quote_operation(QuoteOperation::Delete, Outcome::of(&result));

        match result {
            Ok(quote) => {
                tracing::info!(quote_id = %quote.id(), "Quote deleted");
                self.refresh_stored_gauge().await;
                Ok(())
            }
            Err(e) => {
                tracing::debug!(raw_id, "Quote to delete not found");
                Err(e)
            }
        }
    }

    /// Number of stored quotes.
    pub async fn count(&self) -> Result<usize, QuoteError> {
        self.quote_repo.count().await
    }

    async fn find(&self, raw_id: &str) -> Result<QuoteDto, QuoteError> {
        let id = parse_id(raw_id)?;
        match self.quote_repo.find_by_id(id).await? {
            Some(quote) => {
                tracing::debug!(quote_id = %quote.id(), "Quote fetched");
                Ok(QuoteDto::from_quote(&quote))
            }
            None => {
                tracing::debug!(raw_id, "Quote not found");
                Err(QuoteError::not_found(raw_id))
            }
        }
    }

    async fn refresh_stored_gauge(&self) {
        match self.quote_repo.count().await {
            Ok(count) => set_quotes_stored(count),
            Err(e) => tracing::warn!(error = %e, "Failed to count stored quotes"),
        }
    }
}

fn parse_id(raw_id: &str) -> Result<QuoteId, QuoteError> {
    QuoteId::parse_lenient(raw_id).ok_or_else(|| QuoteError::not_found(raw_id))
}

/// Repository misses name the parsed id; callers see the id they sent.
fn report_raw_id(err: QuoteError, raw_id: &str) -> QuoteError {
    match err {
        QuoteError::NotFound { .. } => QuoteError::not_found(raw_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quote::IdStrategy;
    use crate::infrastructure::persistence::InMemoryQuoteRepository;
    use serde_json::json;

    fn use_case() -> ManageQuotesUseCase<InMemoryQuoteRepository> {
        ManageQuotesUseCase::new(Arc::new(InMemoryQuoteRepository::default()))
    }

    fn input(text: &str, author: &str) -> QuoteInputDto {
        QuoteInputDto {
            text: Some(json!(text)),
            author: Some(json!(author)),
        }
    }

    #[tokio::test]
    async fn create_echoes_fields_with_positive_id() {
        let quotes = use_case();

        let created = quotes.create(input("A", "B")).await.unwrap();

        assert!(created.id > 0);
        assert_eq!(created.text, Some(json!("A")));
        assert_eq!(created.author, Some(json!("B")));
    }

    #[tokio::test]
    async fn create_accepts_missing_fields() {
        let quotes = use_case();

        let created = quotes.create(QuoteInputDto::default()).await.unwrap();

        assert_eq!(created.id, 1);
        assert!(created.text.is_none());
        assert!(created.author.is_none());
    }

    #[tokio::test]
    async fn list_returns_creation_order() {
        let quotes = use_case();
        for n in 1..=3 {
            quotes.create(input(&format!("q{n}"), "a")).await.unwrap();
        }

        let listed = quotes.list().await.unwrap();

        let texts: Vec<_> = listed.iter().map(|q| q.text.clone()).collect();
        assert_eq!(texts, vec![Some(json!("q1")), Some(json!("q2")), Some(json!("q3"))]);
    }

    #[tokio::test]
    async fn get_uses_lenient_id_parse() {
        let quotes = use_case();
        quotes.create(input("A", "B")).await.unwrap();

        assert_eq!(quotes.get("1").await.unwrap().id, 1);
        assert_eq!(quotes.get("1abc").await.unwrap().id, 1);
        assert!(quotes.get("abc").await.is_err());
    }

    #[tokio::test]
    async fn get_unknown_is_not_found_with_raw_id() {
        let quotes = use_case();

        assert_eq!(
            quotes.get("nope").await,
            Err(QuoteError::not_found("nope"))
        );
        assert_eq!(
            quotes.get("999999").await,
            Err(QuoteError::not_found("999999"))
        );
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id() {
        let quotes = use_case();
        let created = quotes.create(input("A", "B")).await.unwrap();

        let updated = quotes
            .update(&created.id.to_string(), input("C", "D"))
            .await
            .unwrap();

        assert_eq!(updated, QuoteDto {
            id: created.id,
            text: Some(json!("C")),
            author: Some(json!("D")),
        });
        assert_eq!(quotes.get("1").await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_unknown_is_not_found() {
        let quotes = use_case();

        let result = quotes.update("7", input("C", "D")).await;

        assert_eq!(result, Err(QuoteError::not_found("7")));
    }

    #[tokio::test]
    async fn misses_report_the_raw_id() {
        let quotes = use_case();

        assert_eq!(
            quotes.update("7abc", input("C", "D")).await,
            Err(QuoteError::not_found("7abc"))
        );
        assert_eq!(
            quotes.delete("007").await,
            Err(QuoteError::not_found("007"))
        );
    }

    #[test]
    fn report_raw_id_relabels_not_found_only() {
        let relabeled = report_raw_id(QuoteError::not_found("7"), "7abc");
        assert_eq!(relabeled, QuoteError::not_found("7abc"));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let quotes = use_case();
        quotes.create(input("A", "B")).await.unwrap();

        quotes.delete("1").await.unwrap();

        assert!(quotes.get("1").await.is_err());
        assert_eq!(quotes.delete("1").await, Err(QuoteError::not_found("1")));
        assert_eq!(quotes.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn length_strategy_reuses_ids_after_delete() {
        let quotes = ManageQuotesUseCase::new(Arc::new(InMemoryQuoteRepository::new(
            IdStrategy::CollectionLength,
        )));
        quotes.create(input("first", "a")).await.unwrap();
        quotes.create(input("second", "b")).await.unwrap();
        quotes.delete("1").await.unwrap();

        let created = quotes.create(input("third", "c")).await.unwrap();

        assert_eq!(created.id, 2);
        assert_eq!(quotes.get("2").await.unwrap().text, Some(json!("second")));
    }
}
