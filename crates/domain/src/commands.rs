//! Chat requests - Strongly typed representations of inbound message intents

use serde::{Deserialize, Serialize};

/// What an inbound chat message asks the bot to do
///
/// Parsed from the raw message text. Anything that is not a forecast
/// request is echoed back to the sender unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatRequest {
    /// Request today's forecast
    Forecast {
        /// City label to stamp on the reply (defaults to the configured city)
        city: Option<String>,
    },

    /// Echo back a message
    Echo {
        /// The original message text
        message: String,
    },
}

impl ChatRequest {
    /// Whether this request triggers the forecast pipeline
    #[must_use]
    pub const fn is_forecast(&self) -> bool {
        matches!(self, Self::Forecast { .. })
    }
}
