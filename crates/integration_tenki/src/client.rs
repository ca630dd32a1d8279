//! tenki.jp page client
//!
//! HTTP client for fetching the forecast page markup. The page URL is
//! fixed per deployment; nothing about an individual request changes
//! which page is fetched.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::{extract::extract_today, models::TodayForecast};

/// Scraping pipeline errors
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// HTTP client could not be initialized
    #[error("client initialization failed: {0}")]
    Init(String),

    /// Fetching the page failed (network error or non-success status)
    #[error("request failed: {0}")]
    Request(String),

    /// The today-weather block is missing from the document
    #[error("could not retrieve weather information")]
    StructureNotFound,

    /// Selector engine or any other extraction failure
    #[error("parse error: {0}")]
    Parse(String),
}

/// Forecast page configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenkiConfig {
    /// Full URL of the forecast page (default: Tokyo, Itabashi ward)
    #[serde(default = "default_page_url")]
    pub page_url: String,

    /// User-Agent header sent with the page request
    ///
    /// The page serves different markup to non-browser agents, so a
    /// desktop browser string is the default.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_page_url() -> String {
    "https://tenki.jp/forecast/3/16/4410/13113/".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
        .to_string()
}

impl Default for TenkiConfig {
    fn default() -> Self {
        Self {
            page_url: default_page_url(),
            user_agent: default_user_agent(),
        }
    }
}

/// Scraper trait for fetching today's forecast
#[async_trait]
pub trait ForecastScraper: Send + Sync {
    /// Fetch the configured page and extract today's forecast fields
    async fn today_forecast(&self) -> Result<TodayForecast, ScrapeError>;

    /// Check if the forecast page answers
    async fn is_healthy(&self) -> bool;
}

/// HTTP client for the tenki.jp forecast page
#[derive(Debug)]
pub struct TenkiClient {
    client: Client,
    config: TenkiConfig,
}

impl TenkiClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: TenkiConfig) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ScrapeError::Init(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, ScrapeError> {
        Self::new(TenkiConfig::default())
    }

    /// Fetch the raw page markup
    ///
    /// Network failures and non-success statuses both surface as
    /// `ScrapeError::Request`.
    #[instrument(skip(self))]
    pub async fn fetch_page(&self) -> Result<String, ScrapeError> {
        let url = &self.config.page_url;
        debug!(url = %url, "Fetching forecast page");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScrapeError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Request(format!("HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| ScrapeError::Request(e.to_string()))
    }
}

#[async_trait]
impl ForecastScraper for TenkiClient {
    #[instrument(skip(self))]
    async fn today_forecast(&self) -> Result<TodayForecast, ScrapeError> {
        let html = self.fetch_page().await?;
        let forecast = extract_today(&html)?;

        debug!(weather = %forecast.weather, "Today's forecast extracted");
        Ok(forecast)
    }

    async fn is_healthy(&self) -> bool {
        self.fetch_page().await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_point_at_the_fixed_page() {
        let config = TenkiConfig::default();
        assert_eq!(config.page_url, "https://tenki.jp/forecast/3/16/4410/13113/");
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
        assert!(config.user_agent.contains("Chrome/91.0.4472.124"));
    }

    #[test]
    fn client_builds_with_defaults() {
        let client = TenkiClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn config_deserializes_with_partial_fields() {
        let config: TenkiConfig = serde_json::from_str(r#"{"page_url": "http://localhost/x"}"#)
            .expect("config should deserialize");
        assert_eq!(config.page_url, "http://localhost/x");
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn structure_not_found_has_exact_message() {
        assert_eq!(
            ScrapeError::StructureNotFound.to_string(),
            "could not retrieve weather information"
        );
    }
}
