//! Persistence Adapters
//!
//! Implementations of the repository traits. Only an in-memory store exists;
//! quotes do not survive a restart.

pub mod in_memory;

pub use in_memory::InMemoryQuoteRepository;
