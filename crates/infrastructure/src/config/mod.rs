//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `server`: HTTP server settings
//! - `forecast`: Forecast page URL, User-Agent, default city label
//! - `messenger`: LINE Messaging API credentials

mod forecast;
mod messenger;
mod server;

use serde::{Deserialize, Serialize};

pub use forecast::ForecastConfig;
pub use messenger::LineConfig;
pub use server::ServerConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Forecast scraping configuration
    #[serde(default)]
    pub forecast: ForecastConfig,

    /// LINE integration configuration
    #[serde(default)]
    pub line: LineConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., TENKIBOT_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("TENKIBOT")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
