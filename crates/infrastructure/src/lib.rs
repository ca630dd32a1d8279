//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the forecast scraping adapter and application configuration.

pub mod adapters;
pub mod config;

pub use adapters::*;
pub use config::{AppConfig, ForecastConfig, LineConfig, ServerConfig};
