//! Observability module for metrics.
//!
//! Prometheus instrumentation for quote operations and HTTP traffic.
//! Logging setup lives in `telemetry`.

mod metrics;

pub use self::metrics::{
    MetricsError, Outcome, QuoteOperation, get_metrics_handle, init_metrics, record_http_request,
    record_quote_operation, set_quotes_stored,
};
