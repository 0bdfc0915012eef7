//! Prometheus metrics for the quote store.
//!
//! Recording functions are no-ops until [`init_metrics`] installs the
//! recorder, so tests and metrics-disabled runs pay nothing. The rendered
//! text is served at `/metrics` on the API port.

use std::sync::OnceLock;
use std::time::Duration;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

use crate::domain::quote::QuoteError;

// =============================================================================
// Global Metrics Handle
// =============================================================================

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Error type for metrics operations.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Failed to install the Prometheus recorder.
    #[error("metrics installation error: {0}")]
    Installation(#[from] BuildError),
}

/// Install the Prometheus recorder and return its handle.
///
/// Calling it again returns the handle installed the first time.
pub fn init_metrics() -> Result<PrometheusHandle, MetricsError> {
    if let Some(handle) = PROMETHEUS_HANDLE.get() {
        return Ok(handle.clone());
    }

    let handle = PrometheusBuilder::new().install_recorder()?;
    register_metrics();

    tracing::info!("Prometheus metrics recorder installed");
    Ok(PROMETHEUS_HANDLE.get_or_init(|| handle).clone())
}

/// Get the Prometheus handle for rendering metrics.
///
/// Returns `None` if metrics have not been initialized.
#[must_use]
pub fn get_metrics_handle() -> Option<PrometheusHandle> {
    PROMETHEUS_HANDLE.get().cloned()
}

fn register_metrics() {
    describe_counter!(
        "quote_store_operations_total",
        "Quote operations by operation and outcome"
    );
    describe_gauge!(
        "quote_store_quotes_stored",
        "Number of quotes currently held in memory"
    );
    describe_counter!(
        "quote_store_http_requests_total",
        "HTTP requests by method and status"
    );
    describe_histogram!(
        "quote_store_http_request_duration_seconds",
        "Time to handle an HTTP request"
    );
}

// =============================================================================
// Metric Labels
// =============================================================================

/// Metric labels for quote operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteOperation {
    /// Create a quote.
    Create,
    /// List all quotes.
    List,
    /// Fetch one quote.
    Get,
    /// Replace a quote's content.
    Update,
    /// Remove a quote.
    Delete,
}

impl QuoteOperation {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::List => "list",
            Self::Get => "get",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Metric labels for operation outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operation succeeded.
    Success,
    /// No quote matched the requested id.
    NotFound,
}

impl Outcome {
    /// Classify the result of an operation.
    #[must_use]
    pub const fn of<T>(result: &Result<T, QuoteError>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(QuoteError::NotFound { .. }) => Self::NotFound,
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::NotFound => "not_found",
        }
    }
}

// =============================================================================
// Metric Recording Functions
// =============================================================================

/// Record a quote operation.
pub fn record_quote_operation(operation: QuoteOperation, outcome: Outcome) {
    counter!(
        "quote_store_operations_total",
        "operation" => operation.as_str(),
        "outcome" => outcome.as_str()
    )
    .increment(1);
}

/// Update the stored quotes gauge.
pub fn set_quotes_stored(count: usize) {
    #[allow(clippy::cast_precision_loss)]
    gauge!("quote_store_quotes_stored").set(count as f64);
}

/// Record a handled HTTP request.
pub fn record_http_request(method: &str, status: u16, elapsed: Duration) {
    counter!(
        "quote_store_http_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string()
    )
    .increment(1);

    histogram!(
        "quote_store_http_request_duration_seconds",
        "method" => method.to_string()
    )
    .record(elapsed.as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_as_str() {
        assert_eq!(QuoteOperation::Create.as_str(), "create");
        assert_eq!(QuoteOperation::List.as_str(), "list");
        assert_eq!(QuoteOperation::Get.as_str(), "get");
        assert_eq!(QuoteOperation::Update.as_str(), "update");
        assert_eq!(QuoteOperation::Delete.as_str(), "delete");
    }

    #[test]
    fn outcome_classifies_results() {
        let ok: Result<(), QuoteError> = Ok(());
        let missing: Result<(), QuoteError> = Err(QuoteError::not_found("9"));
        assert_eq!(Outcome::of(&ok), Outcome::Success);
        assert_eq!(Outcome::of(&missing), Outcome::NotFound);
        assert_eq!(Outcome::NotFound.as_str(), "not_found");
    }

    #[test]
    fn recording_without_recorder_is_noop() {
        record_quote_operation(QuoteOperation::Create, Outcome::Success);
        set_quotes_stored(3);
        record_http_request("GET", 200, Duration::from_millis(2));
    }
}
