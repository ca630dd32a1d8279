//! Weather replies - Chat pattern matching and reply formatting
//!
//! Turns inbound chat text into reply text. Two patterns trigger the
//! forecast pipeline; everything else is echoed back unchanged.

use std::{fmt, sync::Arc};

use domain::ChatRequest;
use tracing::{debug, instrument, warn};

use crate::services::ForecastService;

/// Reply sent when the forecast pipeline fails for a chat request
pub const FORECAST_FAILURE_REPLY: &str = "could not retrieve weather information";

const FORECAST_PREFIX: &str = "today's ";
const FORECAST_SUFFIX: &str = " weather";

/// Parse an inbound chat message into a request
///
/// Recognized patterns (ASCII case insensitive, surrounding whitespace
/// ignored): exactly `weather`, or `today's <city> weather` where the
/// middle words become the city label in their original casing. Anything
/// else is an echo of the original text.
#[must_use]
pub fn parse_chat_request(text: &str) -> ChatRequest {
    let trimmed = text.trim();

    if trimmed.eq_ignore_ascii_case("weather") {
        return ChatRequest::Forecast { city: None };
    }

    if let Some(city) = city_from_pattern(trimmed) {
        return ChatRequest::Forecast {
            city: Some(city.to_string()),
        };
    }

    ChatRequest::Echo {
        message: text.to_string(),
    }
}

/// Extract the city label from `today's <city> weather`
///
/// Returns `None` when the text does not match the pattern or the city
/// part is empty. Byte slicing is guarded so multibyte text never panics.
fn city_from_pattern(text: &str) -> Option<&str> {
    let prefix = text.get(..FORECAST_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(FORECAST_PREFIX) {
        return None;
    }

    let rest = text.get(FORECAST_PREFIX.len()..)?;
    let cut = rest.len().checked_sub(FORECAST_SUFFIX.len())?;
    let suffix = rest.get(cut..)?;
    if !suffix.eq_ignore_ascii_case(FORECAST_SUFFIX) {
        return None;
    }

    let city = rest.get(..cut)?.trim();
    if city.is_empty() { None } else { Some(city) }
}

/// Service for answering inbound chat messages
pub struct WeatherReplyService {
    forecasts: Arc<ForecastService>,
}

impl fmt::Debug for WeatherReplyService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherReplyService").finish_non_exhaustive()
    }
}

impl WeatherReplyService {
    /// Create a new reply service
    pub fn new(forecasts: Arc<ForecastService>) -> Self {
        Self { forecasts }
    }

    /// Compute the reply text for one inbound message
    ///
    /// Forecast requests answer with the report's summary line, or the
    /// fixed failure phrase when the pipeline errors. Non-requests echo
    /// the original text.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn reply_to(&self, text: &str) -> String {
        match parse_chat_request(text) {
            ChatRequest::Forecast { city } => {
                debug!(city = ?city, "forecast request recognized");
                match self.forecasts.report(city.as_deref(), None).await {
                    Ok(report) => report.summary_line(),
                    Err(err) => {
                        warn!(error = %err, "forecast reply degraded to failure phrase");
                        FORECAST_FAILURE_REPLY.to_string()
                    }
                }
            }
            ChatRequest::Echo { message } => message,
        }
    }
}
