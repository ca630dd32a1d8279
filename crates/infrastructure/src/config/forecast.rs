//! Forecast source configuration.

use integration_tenki::TenkiConfig;
use serde::{Deserialize, Serialize};

/// Forecast scraping configuration
///
/// The page URL is fixed per deployment. The `default_city` is a label
/// only; it is stamped on reports when the caller does not name a city
/// and never changes which page is fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Full URL of the forecast page
    #[serde(default = "default_page_url")]
    pub page_url: String,

    /// User-Agent header sent with page requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// City label used when a request does not name one
    #[serde(default = "default_city")]
    pub default_city: String,
}

fn default_page_url() -> String {
    "https://tenki.jp/forecast/3/16/4410/13113/".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
        .to_string()
}

fn default_city() -> String {
    "東京".to_string()
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            page_url: default_page_url(),
            user_agent: default_user_agent(),
            default_city: default_city(),
        }
    }
}

impl ForecastConfig {
    /// Convert to the integration client configuration
    #[must_use]
    pub fn to_client_config(&self) -> TenkiConfig {
        TenkiConfig {
            page_url: self.page_url.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}
