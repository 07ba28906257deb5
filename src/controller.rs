//! Conversation Controller
//!
//! Stateless dispatcher over inbound chat events. Routes each event to the
//! OCR pipeline, the session tracker, or a canned reply, and talks to the
//! transport only through the `MessagingGateway` trait.

use crate::document::DocumentArtifact;
use crate::error::ScribeResult;
use crate::extractor::TextExtractor;
use crate::gateway::{ChatId, ConversationEvent, Inbound, MessagingGateway};
use crate::responses::{ResponsePicker, CANNED_RESPONSES};
use crate::session::SessionTracker;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Menu labels shown on the reply keyboard
pub const MENU_RESTART: &str = "Restart bot";
pub const MENU_INFO: &str = "Bot info";

pub const GREETING: &str =
    "Hi! Send me an image and I will extract the text into a Word document.";

pub const INFO_TEXT: &str = "I'm a bot that helps pull text out of images!\n\
Just send me a picture and I will reply with a Word document of the recognized text.\n\
You can also restart me at any time with the menu button.";

pub const PROCESSING_ERROR: &str =
    "Something went wrong while processing the image. Please try again.";

pub const UNSUPPORTED_NOTICE: &str =
    "I can only read photos. Send the page as an image and I'll extract the text.";

pub struct Controller {
    gateway: Arc<dyn MessagingGateway>,
    extractor: TextExtractor,
    sessions: SessionTracker,
    responses: Box<dyn ResponsePicker>,
}

impl Controller {
    pub fn new(
        gateway: Arc<dyn MessagingGateway>,
        extractor: TextExtractor,
        responses: Box<dyn ResponsePicker>,
    ) -> Self {
        Self {
            gateway,
            extractor,
            sessions: SessionTracker::new(),
            responses,
        }
    }

    /// Dispatch one inbound event
    pub async fn handle(&self, inbound: Inbound) -> ScribeResult<()> {
        let chat = inbound.chat_id;
        debug!("handling {} for chat {chat}", event_kind(&inbound.event));

        match inbound.event {
            ConversationEvent::Start => self.handle_start(chat).await,
            ConversationEvent::Restart => self.handle_restart(chat).await,
            ConversationEvent::Info => self.handle_info(chat).await,
            ConversationEvent::FreeText(text) => self.handle_text(chat, &text).await,
            ConversationEvent::Image { file_ref } => self.handle_image(chat, &file_ref).await,
            ConversationEvent::UnsupportedDocument { file_name } => {
                self.handle_unsupported(chat, file_name.as_deref()).await
            }
        }
    }

    async fn handle_start(&self, chat: ChatId) -> ScribeResult<()> {
        match self
            .gateway
            .send_menu(chat, GREETING, &[MENU_RESTART, MENU_INFO])
            .await
        {
            Ok(id) => self.sessions.record(chat, id)?,
            Err(e) => warn!("failed to send greeting to chat {chat}: {e}"),
        }
        Ok(())
    }

    async fn handle_restart(&self, chat: ChatId) -> ScribeResult<()> {
        let ids = self.sessions.purge_all(chat)?;
        info!("restarting chat {chat}, deleting {} bot messages", ids.len());

        for id in ids {
            // One failed delete must not stop the rest
            if let Err(e) = self.gateway.delete_message(chat, id).await {
                warn!("failed to delete message {id} in chat {chat}: {e}");
            }
        }

        self.sessions.clear(chat)?;
        self.handle_start(chat).await
    }

    async fn handle_info(&self, chat: ChatId) -> ScribeResult<()> {
        self.send_and_record(chat, INFO_TEXT).await
    }

    async fn handle_text(&self, chat: ChatId, text: &str) -> ScribeResult<()> {
        match text {
            MENU_RESTART => self.handle_restart(chat).await,
            MENU_INFO => self.handle_info(chat).await,
            _ => {
                let reply = self.responses.pick(CANNED_RESPONSES);
                self.send_and_record(chat, reply).await
            }
        }
    }

    async fn handle_image(&self, chat: ChatId, file_ref: &str) -> ScribeResult<()> {
        let image = match self.gateway.fetch_image(file_ref).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("failed to fetch image {file_ref} for chat {chat}: {e}");
                return self.send_and_record(chat, PROCESSING_ERROR).await;
            }
        };

        // Empty extraction is a valid outcome and still produces a document
        let paragraphs = self.extractor.extract(&image).await;
        let artifact = DocumentArtifact::build(&[paragraphs]);

        match self.gateway.send_document(chat, &artifact).await {
            Ok(id) => {
                info!(
                    "sent document with {} paragraphs to chat {chat}",
                    artifact.paragraphs.len()
                );
                self.sessions.record(chat, id)?;
                Ok(())
            }
            Err(e) => {
                warn!("failed to deliver document to chat {chat}: {e}");
                self.send_and_record(chat, PROCESSING_ERROR).await
            }
        }
    }

    async fn handle_unsupported(&self, chat: ChatId, file_name: Option<&str>) -> ScribeResult<()> {
        debug!(
            "ignoring non-photo document {:?} from chat {chat}",
            file_name
        );
        self.send_and_record(chat, UNSUPPORTED_NOTICE).await
    }

    /// Send text and remember the resulting message for session cleanup
    async fn send_and_record(&self, chat: ChatId, text: &str) -> ScribeResult<()> {
        match self.gateway.send_text(chat, text).await {
            Ok(id) => self.sessions.record(chat, id)?,
            Err(e) => warn!("delivery to chat {chat} failed: {e}"),
        }
        Ok(())
    }
}

fn event_kind(event: &ConversationEvent) -> &'static str {
    match event {
        ConversationEvent::Start => "start",
        ConversationEvent::Restart => "restart",
        ConversationEvent::Info => "info",
        ConversationEvent::FreeText(_) => "free-text",
        ConversationEvent::Image { .. } => "image",
        ConversationEvent::UnsupportedDocument { .. } => "document",
    }
}
