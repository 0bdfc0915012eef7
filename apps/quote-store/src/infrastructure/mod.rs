//! Infrastructure Layer
//!
//! Adapters around the application layer, following hexagonal architecture:
//!
//! - **Driven Adapters (Outbound)**
//!   - `persistence/`: In-memory quote repository
//!
//! - **Driver Adapters (Inbound)**
//!   - `http/`: REST API controller

pub mod http;
pub mod persistence;
