//! HTTP/REST API adapter.
//!
//! Inbound adapter implementing REST endpoints that delegate to the quote use case.

mod controller;
mod error;
mod request;
mod response;

pub use controller::{AppState, create_router};
pub use error::ApiError;
pub use request::{QuotePayload, parse_quote_body};
pub use response::HealthResponse;
