//! In-memory message store.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use medcare_core::result::AppResult;
use medcare_entity::message::{CreateMessage, Message};

use crate::store::MessageStore;

/// Process-local [`MessageStore`].
#[derive(Debug, Default)]
pub struct MemoryMessageStore {
    messages: RwLock<Vec<Message>>,
}

impl MemoryMessageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageStore for MemoryMessageStore {
    async fn create(&self, data: &CreateMessage) -> AppResult<Message> {
        let message = Message {
            id: Uuid::now_v7(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            email: data.email.clone(),
            phone: data.phone.clone(),
            message: data.message.clone(),
            created_at: Utc::now(),
        };
        self.messages.write().await.push(message.clone());
        Ok(message)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Message>> {
        Ok(self
            .messages
            .read()
            .await
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn list_all(&self) -> AppResult<Vec<Message>> {
        Ok(self.messages.read().await.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut messages = self.messages.write().await;
        let before = messages.len();
        messages.retain(|m| m.id != id);
        Ok(messages.len() != before)
    }
}
