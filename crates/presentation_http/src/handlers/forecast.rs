//! Forecast query handlers

use axum::{
    Json,
    extract::{Query, State},
};
use domain::ForecastReport;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::state::AppState;

/// Query parameters for the forecast route
#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    /// Date stamped on the report verbatim, replacing today's date
    pub date: Option<String>,
    /// City label attached to the report
    pub city: Option<String>,
}

/// Body of a forecast response
///
/// Either the full report or a single-key error record. The route
/// answers 200 in both cases; callers inspect the body shape.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ForecastResponse {
    Report(ForecastReport),
    Error { error: String },
}

/// Today's forecast (GET)
#[instrument(skip(state))]
pub async fn today_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> Json<ForecastResponse> {
    match state
        .forecast_service
        .report(query.city.as_deref(), query.date.as_deref())
        .await
    {
        Ok(report) => {
            debug!(city = %report.city, "Forecast request answered");
            Json(ForecastResponse::Report(report))
        },
        Err(err) => {
            warn!(error = %err, "Forecast request degraded to error record");
            Json(ForecastResponse::Error {
                error: err.to_string(),
            })
        },
    }
}

#[cfg(test)]
mod tests {
    use domain::Temperature;

    use super::*;

    #[test]
    fn report_response_serializes_report_fields_at_top_level() {
        let report = ForecastReport::new(
            "2021-07-01",
            "Osaka",
            "Sunny",
            Temperature::new("28", "19"),
            vec!["0%".to_string(); 4],
            "tenki.jp",
        );
        let json = serde_json::to_string(&ForecastResponse::Report(report)).unwrap();
        assert!(json.starts_with(r#"{"date":"2021-07-01""#));
        assert!(json.contains(r#""city":"Osaka""#));
        assert!(!json.contains("Report"));
    }

    #[test]
    fn error_response_is_a_single_key_record() {
        let json = serde_json::to_string(&ForecastResponse::Error {
            error: "could not retrieve weather information".to_string(),
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"error":"could not retrieve weather information"}"#
        );
    }

    #[test]
    fn query_fields_are_optional() {
        let query: ForecastQuery = serde_json::from_str("{}").unwrap();
        assert!(query.date.is_none());
        assert!(query.city.is_none());
    }

    #[test]
    fn query_parses_both_fields() {
        let query: ForecastQuery =
            serde_json::from_str(r#"{"date":"2021-01-02","city":"Osaka"}"#).unwrap();
        assert_eq!(query.date.as_deref(), Some("2021-01-02"));
        assert_eq!(query.city.as_deref(), Some("Osaka"));
    }
}
