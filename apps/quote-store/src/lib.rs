// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Quote Store - Rust Core Library
//!
//! In-memory store of quotes (`text` + `author`) behind an HTTP/JSON CRUD API.
//!
//! # Architecture (Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: `Quote` entity, `QuoteId`, id allocation strategies and the
//!   `QuoteRepository` port
//!
//! - **Application**: `ManageQuotesUseCase` and the DTOs crossing the API
//!   boundary
//!
//! - **Infrastructure**: Adapters
//!   - `persistence`: Lock-guarded in-memory repository
//!   - `http`: Axum router, handlers and request extraction
//!
//! Configuration, logging and metrics live in `config`, `telemetry` and
//! `observability`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Hexagonal Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and DTOs.
pub mod application;

/// Infrastructure layer - Adapters.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// Environment-based configuration.
pub mod config;

/// Prometheus metrics.
pub mod observability;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

pub use application::dto::{QuoteDto, QuoteInputDto};
pub use application::use_cases::ManageQuotesUseCase;
pub use config::{ConfigError, ServiceConfig};
pub use domain::quote::{IdStrategy, Quote, QuoteContent, QuoteError, QuoteId, QuoteRepository};
pub use infrastructure::http::{ApiError, AppState, create_router};
pub use infrastructure::persistence::InMemoryQuoteRepository;
