//! Application state shared across handlers

use std::sync::Arc;

use application::{ForecastService, WeatherReplyService};
use infrastructure::AppConfig;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Forecast service for report queries
    pub forecast_service: Arc<ForecastService>,
    /// Reply service for inbound chat messages
    pub reply_service: Arc<WeatherReplyService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
