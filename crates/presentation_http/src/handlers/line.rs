//! LINE webhook handlers
//!
//! Receives Messaging API webhook deliveries, verifies the channel
//! signature, and answers each text message through the reply endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use integration_line::{LineClient, WebhookPayload, extract_text_messages, verify_signature};
use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use crate::state::AppState;

/// Per-event processing record returned to the webhook caller
#[derive(Debug, Serialize)]
pub struct EventResponse {
    /// Reply token of the processed event
    pub reply_token: String,
    /// Processing status
    pub status: String,
    /// Reply text computed for the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}

/// LINE webhook handler (POST)
///
/// Signature verification runs over the raw body before parsing. Reply
/// send failures are recorded per event; the delivery as a whole still
/// answers 200 so the platform does not redeliver.
#[instrument(skip(state, headers, body))]
pub async fn handle_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let line_config = &state.config.line;

    // Verify signature if required
    if line_config.signature_required {
        let Some(secret) = line_config.channel_secret_str() else {
            warn!("LINE webhook received but channel_secret not configured");
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "error": "LINE channel_secret not configured"
                })),
            )
                .into_response();
        };

        let signature = headers
            .get("x-line-signature")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !verify_signature(&body, signature, secret) {
            warn!("LINE webhook signature verification failed");
            return (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({
                    "error": "Invalid signature"
                })),
            )
                .into_response();
        }
    }

    // Parse payload
    let payload: WebhookPayload = match serde_json::from_slice(&body) {
        Ok(p) => p,
        Err(e) => {
            error!(error = %e, "Failed to parse LINE webhook payload");
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "error": format!("Invalid payload: {}", e)
                })),
            )
                .into_response();
        },
    };

    // Extract text messages
    let messages = extract_text_messages(&payload);

    if messages.is_empty() {
        // No text messages - the delivery may carry follow/unfollow events
        // or the platform's endpoint verification probe
        debug!("No text messages in webhook payload");
        return (StatusCode::OK, Json(serde_json::json!({"status": "ok"}))).into_response();
    }

    info!(count = messages.len(), "Processing LINE messages");

    // Replies need a configured client
    let Some(client_config) = line_config.to_client_config() else {
        warn!("LINE webhook message received but channel_access_token not configured");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "error": "LINE channel_access_token not configured"
            })),
        )
            .into_response();
    };

    let client = match LineClient::new(client_config) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "Failed to create LINE client");
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "error": format!("LINE client unavailable: {}", e)
                })),
            )
                .into_response();
        },
    };

    let mut responses = Vec::new();
    for (reply_token, text) in messages {
        let response = handle_text_message(&state, &client, &reply_token, &text).await;
        responses.push(response);
    }

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "processed": responses.len(),
            "events": responses
        })),
    )
        .into_response()
}

/// Handle a single text message event
async fn handle_text_message(
    state: &AppState,
    client: &LineClient,
    reply_token: &str,
    text: &str,
) -> EventResponse {
    debug!(
        reply_token = %reply_token,
        text_len = text.len(),
        "Processing LINE text message"
    );

    let reply = state.reply_service.reply_to(text).await;

    match client.reply_message(reply_token, &reply).await {
        Ok(()) => {
            info!(reply_token = %reply_token, "LINE reply sent");
            EventResponse {
                reply_token: reply_token.to_string(),
                status: "processed".to_string(),
                reply: Some(reply),
            }
        },
        Err(e) => {
            error!(
                error = %e,
                reply_token = %reply_token,
                "Failed to send LINE reply"
            );
            EventResponse {
                reply_token: reply_token.to_string(),
                status: "error".to_string(),
                reply: Some(reply),
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_response_serializes() {
        let response = EventResponse {
            reply_token: "token-1".to_string(),
            status: "processed".to_string(),
            reply: Some("Hello!".to_string()),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("token-1"));
        assert!(json.contains("processed"));
        assert!(json.contains("Hello!"));
    }

    #[test]
    fn event_response_skips_none_reply() {
        let response = EventResponse {
            reply_token: "token-1".to_string(),
            status: "error".to_string(),
            reply: None,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"reply_token":"token-1","status":"error"}"#);
    }
}
