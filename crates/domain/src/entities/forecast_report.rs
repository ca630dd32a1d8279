//! Forecast report entities
//!
//! The structured record a forecast request resolves to. All fields are kept
//! as the strings scraped from the page; nothing is parsed into numbers.

use serde::{Deserialize, Serialize};

/// High/low temperature pair for the day
///
/// Values are page text such as `"28"`, or the `"unknown"` sentinel when the
/// page did not carry the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Temperature {
    /// Daily high
    pub max: String,
    /// Daily low
    pub min: String,
}

impl Temperature {
    /// Create a new temperature pair
    #[must_use]
    pub fn new(max: impl Into<String>, min: impl Into<String>) -> Self {
        Self {
            max: max.into(),
            min: min.into(),
        }
    }
}

/// Today's forecast for one location
///
/// Field order matches the wire format of the JSON record returned by the
/// HTTP surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastReport {
    /// Report date, `%Y-%m-%d`
    pub date: String,
    /// City label the caller asked for; free text, never validated
    pub city: String,
    /// Weather description, e.g. `"晴れ"`
    pub weather: String,
    /// High/low pair
    pub temperature: Temperature,
    /// Per-period precipitation probability cells, in page order
    pub precipitation_probability: Vec<String>,
    /// Name of the site the data was scraped from
    pub source: String,
}

impl ForecastReport {
    /// Create a new forecast report
    #[must_use]
    pub fn new(
        date: impl Into<String>,
        city: impl Into<String>,
        weather: impl Into<String>,
        temperature: Temperature,
        precipitation_probability: Vec<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            city: city.into(),
            weather: weather.into(),
            temperature,
            precipitation_probability,
            source: source.into(),
        }
    }

    /// One-line chat summary of the report
    ///
    /// Sentinel values are interpolated as-is; callers asking for a summary
    /// of a degraded report get the sentinels spelled out.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "Today's weather in {} is {}. High {}℃, low {}℃.",
            self.city, self.weather, self.temperature.max, self.temperature.min
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ForecastReport {
        ForecastReport::new(
            "2021-07-01",
            "Osaka",
            "Sunny",
            Temperature::new("28", "19"),
            vec![
                "0%".to_string(),
                "0%".to_string(),
                "10%".to_string(),
                "20%".to_string(),
            ],
            "tenki.jp",
        )
    }

    #[test]
    fn summary_line_interpolates_all_fields() {
        let report = sample_report();
        assert_eq!(
            report.summary_line(),
            "Today's weather in Osaka is Sunny. High 28℃, low 19℃."
        );
    }

    #[test]
    fn summary_line_keeps_sentinels_verbatim() {
        let report = ForecastReport::new(
            "2021-07-01",
            "東京",
            "unknown",
            Temperature::new("unknown", "unknown"),
            vec!["--".to_string(); 4],
            "tenki.jp",
        );
        assert_eq!(
            report.summary_line(),
            "Today's weather in 東京 is unknown. High unknown℃, low unknown℃."
        );
    }

    #[test]
    fn report_serializes_in_wire_field_order() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2021-07-01","city":"Osaka","weather":"Sunny","temperature":{"max":"28","min":"19"},"precipitation_probability":["0%","0%","10%","20%"],"source":"tenki.jp"}"#
        );
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let back: ForecastReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
