//! LINE client for sending reply messages
//!
//! Uses the Messaging API reply endpoint. Replies are bound to the
//! reply token from a webhook event and cannot be sent unsolicited.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

/// LINE API errors
#[derive(Debug, Error)]
pub enum LineError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Missing configuration: {0}")]
    Configuration(String),

    #[error("Invalid signature")]
    InvalidSignature,
}

/// LINE client configuration
#[derive(Debug, Clone)]
pub struct LineClientConfig {
    /// Channel access token for the Messaging API
    pub channel_access_token: String,
    /// Channel secret for webhook signature verification
    pub channel_secret: String,
    /// Whether signature verification is required
    pub signature_required: bool,
    /// API base URL (default: <https://api.line.me>)
    pub api_base_url: String,
}

impl Default for LineClientConfig {
    fn default() -> Self {
        Self {
            channel_access_token: String::new(),
            channel_secret: String::new(),
            signature_required: true,
            api_base_url: "https://api.line.me".to_string(),
        }
    }
}

/// Client for the LINE Messaging API
#[derive(Debug, Clone)]
pub struct LineClient {
    client: Client,
    config: LineClientConfig,
}

/// Reply request body
#[derive(Debug, Serialize)]
struct ReplyRequest {
    #[serde(rename = "replyToken")]
    reply_token: String,
    messages: Vec<OutgoingMessage>,
}

#[derive(Debug, Serialize)]
struct OutgoingMessage {
    #[serde(rename = "type")]
    msg_type: &'static str,
    text: String,
}

/// API error response body
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    message: String,
}

impl LineClient {
    /// Create a new LINE client
    pub fn new(config: LineClientConfig) -> Result<Self, LineError> {
        if config.channel_access_token.is_empty() {
            return Err(LineError::Configuration(
                "channel_access_token is required".to_string(),
            ));
        }

        Ok(Self {
            client: Client::new(),
            config,
        })
    }

    /// Send a text reply to a webhook event
    #[instrument(skip(self, message), fields(message_len = message.len()))]
    pub async fn reply_message(&self, reply_token: &str, message: &str) -> Result<(), LineError> {
        let request = ReplyRequest {
            reply_token: reply_token.to_string(),
            messages: vec![OutgoingMessage {
                msg_type: "text",
                text: message.to_string(),
            }],
        };

        debug!("Sending LINE reply");

        let response = self
            .client
            .post(format!("{}/v2/bot/message/reply", self.config.api_base_url))
            .bearer_auth(&self.config.channel_access_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let error: ApiErrorResponse = response.json().await?;
            Err(LineError::Api {
                status: status.as_u16(),
                message: error.message,
            })
        }
    }

    /// Verify a webhook signature (wrapper around `webhook::verify_signature`)
    pub fn verify_signature(&self, payload: &[u8], signature: &str) -> Result<(), LineError> {
        if !self.config.signature_required {
            return Ok(());
        }

        if crate::webhook::verify_signature(payload, signature, &self.config.channel_secret) {
            Ok(())
        } else {
            Err(LineError::InvalidSignature)
        }
    }

    /// Check if the Messaging API is reachable with this configuration
    ///
    /// Reads the bot info endpoint, which does not send any messages.
    #[instrument(skip(self))]
    pub async fn is_available(&self) -> bool {
        self.client
            .get(format!("{}/v2/bot/info", self.config.api_base_url))
            .bearer_auth(&self.config.channel_access_token)
            .send()
            .await
            .is_ok_and(|res| res.status().is_success())
    }
}
