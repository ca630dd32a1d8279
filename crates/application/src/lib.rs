//! Application layer - Use cases and orchestration
//!
//! Contains the forecast use cases, the chat reply flow, and port
//! definitions. Orchestrates domain objects and infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
