//! Forecast adapter - Implements ForecastPort using integration_tenki

use application::error::ApplicationError;
use application::ports::ForecastPort;
use async_trait::async_trait;
use chrono::Local;
use domain::{ForecastReport, Temperature};
use integration_tenki::{ForecastScraper, SOURCE_NAME, ScrapeError, TenkiClient, TenkiConfig};
use tracing::{debug, instrument};

/// Adapter for forecast retrieval via the tenki.jp scraper
#[derive(Debug)]
pub struct ForecastAdapter {
    client: TenkiClient,
}

impl ForecastAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = TenkiClient::with_defaults()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: TenkiConfig) -> Result<Self, ApplicationError> {
        let client =
            TenkiClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration scrape error to application error
    ///
    /// A missing today section means the page structure changed; that maps
    /// to the dedicated unavailable variant. Everything else keeps its
    /// detail inside the scrape variant.
    fn map_error(err: ScrapeError) -> ApplicationError {
        match err {
            ScrapeError::StructureNotFound => ApplicationError::ForecastUnavailable,
            ScrapeError::Init(_) | ScrapeError::Request(_) | ScrapeError::Parse(_) => {
                ApplicationError::Scrape(err.to_string())
            },
        }
    }

    /// Current local date in the report format
    fn today_date() -> String {
        Local::now().format("%Y-%m-%d").to_string()
    }
}

#[async_trait]
impl ForecastPort for ForecastAdapter {
    #[instrument(skip(self))]
    async fn today_forecast(&self, city: &str) -> Result<ForecastReport, ApplicationError> {
        let fields = self
            .client
            .today_forecast()
            .await
            .map_err(Self::map_error)?;

        debug!(weather = %fields.weather, "Retrieved today's forecast");

        Ok(ForecastReport::new(
            Self::today_date(),
            city,
            fields.weather,
            Temperature::new(fields.temperature_max, fields.temperature_min),
            fields.precipitation_probability,
            SOURCE_NAME,
        ))
    }

    #[instrument(skip(self))]
    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_adapter() {
        let adapter = ForecastAdapter::new();
        assert!(adapter.is_ok());
    }

    #[test]
    fn with_config_creates_adapter() {
        let config = TenkiConfig {
            page_url: "http://localhost/forecast".to_string(),
            user_agent: "test-agent".to_string(),
        };
        let adapter = ForecastAdapter::with_config(config);
        assert!(adapter.is_ok());
    }

    #[test]
    fn debug_impl() {
        let adapter = ForecastAdapter::new().unwrap();
        let debug_str = format!("{adapter:?}");
        assert!(debug_str.contains("ForecastAdapter"));
    }

    #[test]
    fn map_error_structure_not_found() {
        let err = ScrapeError::StructureNotFound;
        let app_err = ForecastAdapter::map_error(err);
        assert!(matches!(app_err, ApplicationError::ForecastUnavailable));
        assert_eq!(app_err.to_string(), "could not retrieve weather information");
    }

    #[test]
    fn map_error_request_keeps_detail() {
        let err = ScrapeError::Request("HTTP 500 Internal Server Error".to_string());
        let app_err = ForecastAdapter::map_error(err);
        assert!(matches!(app_err, ApplicationError::Scrape(_)));
        assert_eq!(
            app_err.to_string(),
            "scraping error: request failed: HTTP 500 Internal Server Error"
        );
    }

    #[test]
    fn map_error_parse_keeps_detail() {
        let err = ScrapeError::Parse("bad selector".to_string());
        let app_err = ForecastAdapter::map_error(err);
        assert_eq!(app_err.to_string(), "scraping error: parse error: bad selector");
    }

    #[test]
    fn today_date_is_iso_formatted() {
        let date = ForecastAdapter::today_date();
        assert_eq!(date.len(), 10);
        assert_eq!(date.as_bytes()[4], b'-');
        assert_eq!(date.as_bytes()[7], b'-');
    }

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ForecastAdapter>();
    }
}
