//! Forecast page data models
//!
//! Types for the fields read out of the forecast page, kept as page text.

use serde::{Deserialize, Serialize};

/// Sentinel for a scalar field whose node is missing from the page
pub const UNKNOWN_VALUE: &str = "unknown";

/// Placeholder cells used when no precipitation values were found
pub const MISSING_PRECIPITATION: [&str; 4] = ["--", "--", "--", "--"];

/// Name of the site forecasts are scraped from
pub const SOURCE_NAME: &str = "tenki.jp";

/// Today's forecast fields as extracted from the page
///
/// All values are trimmed page text. Cell counts other than four in
/// `precipitation_probability` are passed through as found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayForecast {
    /// Weather summary text, e.g. `"晴れ"`
    pub weather: String,
    /// Daily high as text
    pub temperature_max: String,
    /// Daily low as text
    pub temperature_min: String,
    /// Precipitation probability cells from the value row, left to right
    pub precipitation_probability: Vec<String>,
}

impl TodayForecast {
    /// Placeholder precipitation cells as owned strings
    #[must_use]
    pub fn missing_precipitation() -> Vec<String> {
        MISSING_PRECIPITATION.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_has_four_dash_cells() {
        let cells = TodayForecast::missing_precipitation();
        assert_eq!(cells, vec!["--", "--", "--", "--"]);
    }

    #[test]
    fn source_name_is_fixed() {
        assert_eq!(SOURCE_NAME, "tenki.jp");
    }
}
