//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod manage_quotes;

pub use manage_quotes::ManageQuotesUseCase;
