//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
///
/// The `Display` strings of the forecast variants are the wire error
/// messages: the HTTP boundary serializes them verbatim into the
/// `{"error": ...}` record.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The forecast page had no recognizable today section
    #[error("could not retrieve weather information")]
    ForecastUnavailable,

    /// Fetching or extracting the forecast failed
    #[error("scraping error: {0}")]
    Scrape(String),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Whether this error came out of the forecast pipeline
    ///
    /// Pipeline failures are reported inside a 200 response body; anything
    /// else is a genuine server-side fault.
    #[must_use]
    pub const fn is_forecast_failure(&self) -> bool {
        matches!(self, Self::ForecastUnavailable | Self::Scrape(_))
    }
}
