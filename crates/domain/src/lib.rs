//! Domain layer for tenkibot
//!
//! Contains the forecast entities and chat request types. This layer has no
//! external dependencies and defines the ubiquitous language.

pub mod commands;
pub mod entities;

pub use commands::ChatRequest;
pub use entities::*;
