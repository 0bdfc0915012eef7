//! Domain Layer
//!
//! The innermost layer, free of HTTP and runtime concerns. It defines:
//!
//! - **Entities**: `Quote` and its caller-supplied `QuoteContent`
//! - **Identifiers**: `QuoteId` and the lenient path-segment parse
//! - **Id allocation**: explicit strategies for assigning new ids
//! - **Repository Traits**: storage abstraction (implemented in adapters)
//!
//! # Bounded Contexts
//!
//! - [`quote`]: the quote collection and its CRUD contract

pub mod quote;
