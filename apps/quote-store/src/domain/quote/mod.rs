//! Quote Bounded Context
//!
//! The quote entity, its identifier, id allocation, and the repository port.

pub mod entity;
pub mod errors;
pub mod id_strategy;
pub mod identifiers;
pub mod repository;

pub use entity::{Quote, QuoteContent};
pub use errors::QuoteError;
pub use id_strategy::{IdAllocator, IdStrategy};
pub use identifiers::QuoteId;
pub use repository::QuoteRepository;
