//! Forecast port
//!
//! Defines the interface for retrieving today's forecast from the
//! scraping pipeline.

use async_trait::async_trait;
use domain::ForecastReport;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for forecast retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch the forecast page, extract today's fields, and assemble a
    /// report stamped with the current local date and the given city label
    ///
    /// The city label is attached to the report as-is; it never influences
    /// which page is fetched.
    async fn today_forecast(&self, city: &str) -> Result<ForecastReport, ApplicationError>;

    /// Check if the forecast source answers at all
    async fn is_available(&self) -> bool;
}
