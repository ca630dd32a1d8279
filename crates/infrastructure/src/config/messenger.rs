//! Messenger configuration: LINE Messaging API.

use integration_line::LineClientConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::default_true;

/// LINE integration configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct LineConfig {
    /// Channel access token for the Messaging API (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub channel_access_token: Option<SecretString>,

    /// Channel secret for webhook signature verification (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub channel_secret: Option<SecretString>,

    /// Whether signature verification is required (default: true)
    #[serde(default = "default_true")]
    pub signature_required: bool,

    /// Messaging API base URL (default: <https://api.line.me>)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl std::fmt::Debug for LineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineConfig")
            .field(
                "channel_access_token",
                &if self.channel_access_token.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field(
                "channel_secret",
                &if self.channel_secret.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("signature_required", &self.signature_required)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

fn default_api_base_url() -> String {
    "https://api.line.me".to_string()
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            channel_access_token: None,
            channel_secret: None,
            signature_required: true,
            api_base_url: default_api_base_url(),
        }
    }
}

impl LineConfig {
    /// Get the channel access token as a string reference (for API calls)
    #[must_use]
    pub fn channel_access_token_str(&self) -> Option<&str> {
        self.channel_access_token
            .as_ref()
            .map(ExposeSecret::expose_secret)
    }

    /// Get the channel secret as a string reference (for signature verification)
    #[must_use]
    pub fn channel_secret_str(&self) -> Option<&str> {
        self.channel_secret
            .as_ref()
            .map(ExposeSecret::expose_secret)
    }

    /// Whether the integration has the credentials it needs to send replies
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.channel_access_token.is_some()
    }

    /// Convert to the integration client configuration
    ///
    /// Returns `None` when no access token is configured; the webhook
    /// route answers 503 in that case instead of building a client.
    #[must_use]
    pub fn to_client_config(&self) -> Option<LineClientConfig> {
        let token = self.channel_access_token_str()?;
        Some(LineClientConfig {
            channel_access_token: token.to_string(),
            channel_secret: self.channel_secret_str().unwrap_or_default().to_string(),
            signature_required: self.signature_required,
            api_base_url: self.api_base_url.clone(),
        })
    }
}
