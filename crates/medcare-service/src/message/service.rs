//! Contact-form message service.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use medcare_core::error::AppError;
use medcare_core::result::AppResult;
use medcare_database::store::MessageStore;
use medcare_entity::message::{CreateMessage, Message};

use crate::validation::{FieldErrors, Scalar, filled, filled_scalar, require_all};

/// Body of a contact message.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Scalar>,
    pub message: Option<String>,
}

/// Stores and administers contact messages.
#[derive(Debug, Clone)]
pub struct MessageService {
    messages: Arc<dyn MessageStore>,
}

impl MessageService {
    /// Creates a new message service.
    pub fn new(messages: Arc<dyn MessageStore>) -> Self {
        Self { messages }
    }

    /// Validate and store a message.
    pub async fn send(&self, req: SendMessageRequest) -> AppResult<Message> {
        require_all(&[
            filled(&req.first_name).is_some(),
            filled(&req.last_name).is_some(),
            filled(&req.email).is_some(),
            filled_scalar(&req.phone).is_some(),
            filled(&req.message).is_some(),
        ])?;

        let data = CreateMessage {
            first_name: req.first_name.unwrap_or_default().trim().to_string(),
            last_name: req.last_name.unwrap_or_default().trim().to_string(),
            email: req.email.unwrap_or_default().trim().to_string(),
            phone: req.phone.map(|p| p.to_text()).unwrap_or_default(),
            message: req.message.unwrap_or_default().trim().to_string(),
        };

        let mut errors = FieldErrors::new();
        errors.person(&data.first_name, &data.last_name, &data.email, &data.phone);
        errors.min_chars(&data.message, 10, "Message");
        errors.finish()?;

        let message = self.messages.create(&data).await?;
        info!(message_id = %message.id, "Message received");
        Ok(message)
    }

    /// Every message.
    pub async fn list_all(&self) -> AppResult<Vec<Message>> {
        self.messages.list_all().await
    }

    /// Remove a message.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.messages.delete(id).await? {
            return Err(AppError::not_found("Message not found!"));
        }
        info!(message_id = %id, "Message deleted");
        Ok(())
    }
}
