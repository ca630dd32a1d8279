//! LINE webhook handling
//!
//! Receives and validates webhook requests from the LINE platform.
//! Signatures are a base64-encoded HMAC-SHA256 over the raw request body,
//! keyed with the channel secret.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// LINE webhook request body
#[derive(Debug, Deserialize)]
pub struct WebhookPayload {
    /// Bot user ID the events were sent to
    pub destination: String,
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

/// One webhook event
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    /// Token for replying to this event; short-lived, single use
    #[serde(default)]
    pub reply_token: Option<String>,
    #[serde(default)]
    pub message: Option<MessageContent>,
    #[serde(default)]
    pub source: Option<EventSource>,
    /// Event time in milliseconds since the epoch
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// Message body of a message event
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageContent {
    pub id: String,
    #[serde(rename = "type")]
    pub message_type: String,
    #[serde(default)]
    pub text: Option<String>,
}

/// Sender of an event
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSource {
    #[serde(rename = "type")]
    pub source_type: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Verify a webhook signature
///
/// `signature` is the `x-line-signature` header value: the base64 digest
/// of HMAC-SHA256 over the raw body.
pub fn verify_signature(payload: &[u8], signature: &str, secret: &str) -> bool {
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        warn!("Failed to create HMAC");
        return false;
    };

    mac.update(payload);

    let Ok(expected) = BASE64.decode(signature) else {
        warn!("Failed to decode signature base64");
        return false;
    };

    mac.verify_slice(&expected).is_ok()
}

/// Extract text messages from a webhook payload
///
/// Returns `(reply_token, text)` pairs for every text message event that
/// can be replied to. Other event kinds (follow, sticker, unsend, ...)
/// are skipped.
pub fn extract_text_messages(payload: &WebhookPayload) -> Vec<(String, String)> {
    let mut messages = Vec::new();

    for event in &payload.events {
        if event.event_type != "message" {
            continue;
        }
        let Some(reply_token) = &event.reply_token else {
            continue;
        };
        if let Some(message) = &event.message {
            if message.message_type == "text" {
                if let Some(text) = &message.text {
                    messages.push((reply_token.clone(), text.clone()));
                }
            }
        }
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_event(reply_token: &str, message_type: &str, text: Option<&str>) -> WebhookEvent {
        WebhookEvent {
            event_type: "message".to_string(),
            reply_token: Some(reply_token.to_string()),
            message: Some(MessageContent {
                id: "468789577898262530".to_string(),
                message_type: message_type.to_string(),
                text: text.map(ToString::to_string),
            }),
            source: Some(EventSource {
                source_type: "user".to_string(),
                user_id: Some("U4af4980629".to_string()),
            }),
            timestamp: Some(1_462_629_479_859),
        }
    }

    fn payload_with(events: Vec<WebhookEvent>) -> WebhookPayload {
        WebhookPayload {
            destination: "Uab12cd34ef56".to_string(),
            events,
        }
    }

    #[test]
    fn extracts_text_messages() {
        let payload = payload_with(vec![message_event("token-1", "text", Some("Hello!"))]);

        let messages = extract_text_messages(&payload);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, "token-1");
        assert_eq!(messages[0].1, "Hello!");
    }

    #[test]
    fn extracts_multiple_messages_in_order() {
        let payload = payload_with(vec![
            message_event("token-1", "text", Some("First")),
            message_event("token-2", "text", Some("Second")),
        ]);

        let messages = extract_text_messages(&payload);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].1, "First");
        assert_eq!(messages[1].1, "Second");
    }

    #[test]
    fn ignores_non_text_messages() {
        let payload = payload_with(vec![message_event("token-1", "sticker", None)]);
        assert!(extract_text_messages(&payload).is_empty());
    }

    #[test]
    fn ignores_non_message_events() {
        let payload = payload_with(vec![WebhookEvent {
            event_type: "follow".to_string(),
            reply_token: Some("token-1".to_string()),
            message: None,
            source: None,
            timestamp: None,
        }]);
        assert!(extract_text_messages(&payload).is_empty());
    }

    #[test]
    fn ignores_messages_without_reply_token() {
        let mut event = message_event("unused", "text", Some("hi"));
        event.reply_token = None;
        let payload = payload_with(vec![event]);
        assert!(extract_text_messages(&payload).is_empty());
    }

    #[test]
    fn handles_empty_event_list() {
        // The platform sends an empty event list when verifying the endpoint
        let payload = payload_with(vec![]);
        assert!(extract_text_messages(&payload).is_empty());
    }

    #[test]
    fn parses_wire_format_payload() {
        let json = r#"{
            "destination": "Uab12cd34ef56",
            "events": [{
                "type": "message",
                "mode": "active",
                "timestamp": 1462629479859,
                "source": {"type": "user", "userId": "U4af4980629"},
                "replyToken": "nHuyWiB7yP5Zw52FIkcQobQuGDXCTA",
                "message": {"id": "325708", "type": "text", "text": "weather"}
            }]
        }"#;

        let payload: WebhookPayload = serde_json::from_str(json).unwrap();
        let messages = extract_text_messages(&payload);

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, "nHuyWiB7yP5Zw52FIkcQobQuGDXCTA");
        assert_eq!(messages[0].1, "weather");
    }

    #[test]
    fn verify_signature_valid() {
        let secret = "test_secret";
        let payload = b"test payload";
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(payload);
        let signature = BASE64.encode(mac.finalize().into_bytes());

        assert!(verify_signature(payload, &signature, secret));
    }

    #[test]
    fn verify_signature_rejects_tampered_body() {
        let secret = "test_secret";
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(b"original body");
        let signature = BASE64.encode(mac.finalize().into_bytes());

        assert!(!verify_signature(b"tampered body", &signature, secret));
    }

    #[test]
    fn verify_signature_rejects_wrong_secret() {
        let payload = b"test payload";
        let mut mac = HmacSha256::new_from_slice(b"right_secret").unwrap();
        mac.update(payload);
        let signature = BASE64.encode(mac.finalize().into_bytes());

        assert!(!verify_signature(payload, &signature, "wrong_secret"));
    }

    #[test]
    fn verify_signature_rejects_garbage() {
        assert!(!verify_signature(b"test", "not base64 at all!!!", "secret"));
        assert!(!verify_signature(b"test", "", "secret"));
    }
}
