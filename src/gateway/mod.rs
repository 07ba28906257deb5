//! Messaging Gateway
//!
//! Chat-transport seam. The controller only ever talks to the
//! `MessagingGateway` trait; the `telegram` module implements it over the
//! Bot API.

pub mod telegram;

use crate::document::DocumentArtifact;
use anyhow::Result;
use async_trait::async_trait;

// Re-export main types
pub use telegram::TelegramGateway;

pub type ChatId = i64;
pub type MessageId = i64;

/// What the user did, decoded from the transport's update format.
/// Images carry a gateway-resolvable reference rather than raw bytes so
/// the download failure surfaces inside the controller's pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversationEvent {
    Start,
    Restart,
    Info,
    FreeText(String),
    Image { file_ref: String },
    UnsupportedDocument { file_name: Option<String> },
}

/// One inbound update, addressed by chat
#[derive(Debug, Clone)]
pub struct Inbound {
    pub chat_id: ChatId,
    pub event: ConversationEvent,
}

/// Trait for chat transports
#[async_trait]
pub trait MessagingGateway: Send + Sync {
    /// Get the gateway name
    fn name(&self) -> &str;

    /// Send plain text; returns the id of the sent message
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<MessageId>;

    /// Send text with a persistent reply-keyboard menu attached
    async fn send_menu(&self, chat_id: ChatId, text: &str, buttons: &[&str]) -> Result<MessageId>;

    /// Upload a document artifact; returns the id of the sent message
    async fn send_document(&self, chat_id: ChatId, artifact: &DocumentArtifact)
        -> Result<MessageId>;

    /// Delete a previously sent message
    async fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<()>;

    /// Resolve an image reference from an inbound event to raw bytes
    async fn fetch_image(&self, file_ref: &str) -> Result<Vec<u8>>;
}
