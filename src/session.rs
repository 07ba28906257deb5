//! Session Tracking
//!
//! Registry of every message the bot has sent in the current session, so a
//! restart can delete them in bulk. Logs are keyed per chat and guarded by
//! one mutex; `record` and `purge_all` can never interleave mid-operation.
//! In-memory only, nothing survives a process restart.

use crate::error::ScribeResult;
use crate::gateway::{ChatId, MessageId};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct SessionTracker {
    log: Mutex<HashMap<ChatId, Vec<MessageId>>>,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember an outbound message for later cleanup
    pub fn record(&self, chat: ChatId, message: MessageId) -> ScribeResult<()> {
        self.log.lock()?.entry(chat).or_default().push(message);
        Ok(())
    }

    /// Drain and return every recorded id for the chat, oldest first.
    /// A second call without intervening records returns an empty list.
    pub fn purge_all(&self, chat: ChatId) -> ScribeResult<Vec<MessageId>> {
        Ok(self.log.lock()?.remove(&chat).unwrap_or_default())
    }

    /// Forget everything recorded for the chat
    pub fn clear(&self, chat: ChatId) -> ScribeResult<()> {
        self.log.lock()?.remove(&chat);
        Ok(())
    }
}
