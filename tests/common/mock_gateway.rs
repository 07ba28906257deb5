//! Mock Messaging Gateway for Testing
//!
//! Records every outbound call and hands out sequential message ids.

use anyhow::Result;
use async_trait::async_trait;
use snapscribe::document::DocumentArtifact;
use snapscribe::gateway::{ChatId, MessageId, MessagingGateway};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

pub struct MockGateway {
    next_id: AtomicI64,
    /// Image references the gateway can resolve
    pub images: Mutex<HashMap<String, Vec<u8>>>,
    /// Fail every send_document call
    pub fail_documents: AtomicBool,
    /// Message ids whose deletion should fail
    pub failing_deletes: Mutex<Vec<MessageId>>,
    /// Recorded calls, in order
    pub sent_texts: Arc<Mutex<Vec<(ChatId, String)>>>,
    pub sent_menus: Arc<Mutex<Vec<(ChatId, String, Vec<String>)>>>,
    pub sent_documents: Arc<Mutex<Vec<(ChatId, DocumentArtifact)>>>,
    pub delete_attempts: Arc<Mutex<Vec<(ChatId, MessageId)>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            images: Mutex::new(HashMap::new()),
            fail_documents: AtomicBool::new(false),
            failing_deletes: Mutex::new(Vec::new()),
            sent_texts: Arc::new(Mutex::new(Vec::new())),
            sent_menus: Arc::new(Mutex::new(Vec::new())),
            sent_documents: Arc::new(Mutex::new(Vec::new())),
            delete_attempts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register an image the gateway will resolve for `file_ref`
    pub fn add_image(&self, file_ref: &str, bytes: Vec<u8>) {
        self.images
            .lock()
            .unwrap()
            .insert(file_ref.to_string(), bytes);
    }

    fn next_id(&self) -> MessageId {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

#[async_trait]
impl MessagingGateway for MockGateway {
    fn name(&self) -> &str {
        "mock"
    }

    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<MessageId> {
        let id = self.next_id();
        self.sent_texts
            .lock()
            .unwrap()
            .push((chat_id, text.to_string()));
        Ok(id)
    }

    async fn send_menu(&self, chat_id: ChatId, text: &str, buttons: &[&str]) -> Result<MessageId> {
        let id = self.next_id();
        self.sent_menus.lock().unwrap().push((
            chat_id,
            text.to_string(),
            buttons.iter().map(|b| b.to_string()).collect(),
        ));
        Ok(id)
    }

    async fn send_document(
        &self,
        chat_id: ChatId,
        artifact: &DocumentArtifact,
    ) -> Result<MessageId> {
        if self.fail_documents.load(Ordering::SeqCst) {
            anyhow::bail!("document upload rejected");
        }
        let id = self.next_id();
        self.sent_documents
            .lock()
            .unwrap()
            .push((chat_id, artifact.clone()));
        Ok(id)
    }

    async fn delete_message(&self, chat_id: ChatId, message_id: MessageId) -> Result<()> {
        self.delete_attempts
            .lock()
            .unwrap()
            .push((chat_id, message_id));
        if self.failing_deletes.lock().unwrap().contains(&message_id) {
            anyhow::bail!("message {message_id} already gone");
        }
        Ok(())
    }

    async fn fetch_image(&self, file_ref: &str) -> Result<Vec<u8>> {
        self.images
            .lock()
            .unwrap()
            .get(file_ref)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("unknown file reference {file_ref}"))
    }
}
