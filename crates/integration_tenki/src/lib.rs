//! tenki.jp forecast page integration
//!
//! Fetches the fixed forecast page over HTTP and extracts today's fields
//! from its markup with CSS selectors. The page shape is known but
//! unstable; missing nodes degrade to sentinel values instead of errors.

pub mod client;
pub mod extract;
mod models;

pub use client::{ForecastScraper, ScrapeError, TenkiClient, TenkiConfig};
pub use extract::extract_today;
pub use models::{MISSING_PRECIPITATION, SOURCE_NAME, TodayForecast, UNKNOWN_VALUE};
