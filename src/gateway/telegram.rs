//! Telegram gateway — long-polls the Bot API for updates

use super::{ChatId, ConversationEvent, Inbound, MessageId, MessagingGateway};
use crate::document::{DocumentArtifact, DOCX_MIME};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::mpsc;

pub struct TelegramGateway {
    bot_token: String,
    poll_timeout: u64,
    client: reqwest::Client,
}

impl TelegramGateway {
    pub fn new(bot_token: String, poll_timeout: u64) -> Self {
        Self {
            bot_token,
            poll_timeout,
            client: reqwest::Client::new(),
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!("https://api.telegram.org/bot{}/{method}", self.bot_token)
    }

    fn file_url(&self, file_path: &str) -> String {
        format!(
            "https://api.telegram.org/file/bot{}/{file_path}",
            self.bot_token
        )
    }

    /// Check the token against the API
    pub async fn health_check(&self) -> bool {
        self.client
            .get(self.api_url("getMe"))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    /// Poll for updates forever, decoding each into an `Inbound` event.
    /// Returns only when the receiving side is dropped.
    pub async fn listen(&self, tx: mpsc::Sender<Inbound>) -> Result<()> {
        let mut offset: i64 = 0;

        tracing::info!("Telegram gateway listening for updates...");

        loop {
            let body = serde_json::json!({
                "offset": offset,
                "timeout": self.poll_timeout,
                "allowed_updates": ["message"]
            });

            let resp = match self
                .client
                .post(self.api_url("getUpdates"))
                .json(&body)
                .send()
                .await
            {
                Ok(r) => r,
                Err(e) => {
                    tracing::warn!("Telegram poll error: {e}");
                    tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                    continue;
                }
            };

            let data: Value = match resp.json().await {
                Ok(d) => d,
                Err(e) => {
                    tracing::warn!("Telegram parse error: {e}");
                    tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                    continue;
                }
            };

            if let Some(results) = data.get("result").and_then(Value::as_array) {
                for update in results {
                    // Advance offset past this update
                    if let Some(uid) = update.get("update_id").and_then(Value::as_i64) {
                        offset = uid + 1;
                    }

                    let Some(message) = update.get("message") else {
                        continue;
                    };

                    let Some(chat_id) = message
                        .get("chat")
                        .and_then(|c| c.get("id"))
                        .and_then(Value::as_i64)
                    else {
                        continue;
                    };

                    let Some(event) = decode_event(message) else {
                        continue;
                    };

                    if tx.send(Inbound { chat_id, event }).await.is_err() {
                        return Ok(());
                    }
                }
            }
        }
    }

    async fn message_id_from_response(resp: reqwest::Response) -> Result<MessageId> {
        let data: Value = resp.json().await?;
        if !data.get("ok").and_then(Value::as_bool).unwrap_or(false) {
            anyhow::bail!("Telegram API rejected the call: {data}");
        }
        data.get("result")
            .and_then(|r| r.get("message_id"))
            .and_then(Value::as_i64)
            .context("Telegram response had no message_id")
    }
}

/// Decode one Bot API message object into a conversation event
fn decode_event(message: &Value) -> Option<ConversationEvent> {
    if let Some(text) = message.get("text").and_then(Value::as_str) {
        return Some(match text.trim() {
            "/start" => ConversationEvent::Start,
            "/restart" => ConversationEvent::Restart,
            "/info" => ConversationEvent::Info,
            other => ConversationEvent::FreeText(other.to_string()),
        });
    }

    if let Some(photos) = message.get("photo").and_then(Value::as_array) {
        // Size variants are listed smallest first; take the largest
        let file_ref = photos
            .last()
            .and_then(|p| p.get("file_id"))
            .and_then(Value::as_str)?;
        return Some(ConversationEvent::Image {
            file_ref: file_ref.to_string(),
        });
    }

    if let Some(doc) = message.get("document") {
        let file_name = doc
            .get("file_name")
            .and_then(Value::as_str)
            .map(str::to_string);
        return Some(ConversationEvent::UnsupportedDocument { file_name });
    }

    None
}

#[async_trait]
impl MessagingGateway for TelegramGateway {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<MessageId> {
        let body = serde_json::json!({
            "chat_id": chat_id,
            "text": text
        });

        let resp = self
            .client
            .post(self.api_url("sendMessage"))
            .json(&body)
            .send()
            .await?;

        Self::message_id_from_response(resp).await
    }

    async fn send_menu(&self, chat_id: ChatId, text: &str, buttons: &[&str]) -> Result<MessageId> {
        let body = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
            "reply_markup": {
                "keyboard": [buttons],
                "resize_keyboard": true,
                "one_time_keyboard": false
            }
        });

        let resp = self
            .client
            .post(self.api_url("sendMessage"))
            .json(&body)
            .send()
            .await?;

        Self::message_id_from_response(resp).await
    }

    async fn send_document(
        &self,
        chat_id: ChatId,
        artifact: &DocumentArtifact,
    ) -> Result<MessageId> {
        let bytes = artifact.to_docx_bytes()?;
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(artifact.file_name.clone())
            .mime_str(DOCX_MIME)?;
        let form = reqwest::multipart::Form::new()
            .text("chat_id", chat_id.to_string())
            .part("document", part);

        let resp = self
            .client
            .post(self.api_url("sendDocument"))
            .multipart(form)
            .send()
            .await?;

        Self::message_id_from_response(resp).await
    }

    async fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<()> {
        let body = serde_json::json!({
            "chat_id": chat_id,
            "message_id": message_id
        });

        let resp = self
            .client
            .post(self.api_url("deleteMessage"))
            .json(&body)
            .send()
            .await?;

        let data: Value = resp.json().await?;
        if !data.get("ok").and_then(Value::as_bool).unwrap_or(false) {
            anyhow::bail!("deleteMessage failed for {message_id}: {data}");
        }
        Ok(())
    }

    async fn fetch_image(&self, file_ref: &str) -> Result<Vec<u8>> {
        let body = serde_json::json!({ "file_id": file_ref });
        let data: Value = self
            .client
            .post(self.api_url("getFile"))
            .json(&body)
            .send()
            .await?
            .json()
            .await?;

        let file_path = data
            .get("result")
            .and_then(|r| r.get("file_path"))
            .and_then(Value::as_str)
            .context("getFile response had no file_path")?;

        let bytes = self
            .client
            .get(self.file_url(file_path))
            .send()
            .await?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }
}
