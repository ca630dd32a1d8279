//! LINE Messaging API integration
//!
//! Handles LINE webhook payloads, signature verification, and reply
//! message sending.

pub mod client;
pub mod webhook;

pub use client::{LineClient, LineClientConfig, LineError};
pub use webhook::{WebhookEvent, WebhookPayload, extract_text_messages, verify_signature};
