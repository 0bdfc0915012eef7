//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Use Cases**: the quote CRUD operations
//! - **DTOs**: Data transfer objects for API boundaries

pub mod dto;
pub mod use_cases;

pub use dto::*;
pub use use_cases::*;
