//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for API boundaries and use case inputs/outputs.

mod quote_dto;

pub use quote_dto::{QuoteDto, QuoteInputDto};
