//! Forecast service - Today's forecast with caller overrides

use std::{fmt, sync::Arc};

use domain::ForecastReport;
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::ForecastPort};

/// Service for answering forecast queries
///
/// Resolves the city label, runs the scraping pipeline through the port,
/// and applies the caller's date override to the assembled report.
pub struct ForecastService {
    forecasts: Arc<dyn ForecastPort>,
    default_city: String,
}

impl fmt::Debug for ForecastService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForecastService")
            .field("default_city", &self.default_city)
            .finish_non_exhaustive()
    }
}

impl ForecastService {
    /// Create a new forecast service
    pub fn new(forecasts: Arc<dyn ForecastPort>, default_city: impl Into<String>) -> Self {
        Self {
            forecasts,
            default_city: default_city.into(),
        }
    }

    /// City label used when the caller does not supply one
    pub fn default_city(&self) -> &str {
        &self.default_city
    }

    /// Run the forecast pipeline for one request
    ///
    /// `city` falls back to the configured default when absent. A supplied
    /// `date` replaces the report's date verbatim after assembly; it is not
    /// validated and does not change which page is fetched.
    #[instrument(skip(self))]
    pub async fn report(
        &self,
        city: Option<&str>,
        date: Option<&str>,
    ) -> Result<ForecastReport, ApplicationError> {
        let city = city.unwrap_or(&self.default_city);

        let mut report = self.forecasts.today_forecast(city).await?;
        if let Some(date) = date {
            report.date = date.to_string();
        }

        debug!(city = %report.city, date = %report.date, "forecast report assembled");
        Ok(report)
    }

    /// Check if the forecast source answers at all
    pub async fn source_available(&self) -> bool {
        self.forecasts.is_available().await
    }
}
