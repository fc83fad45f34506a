//! Message entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A contact-form message left for the hospital.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    /// Internal storage key.
    pub id: Uuid,
    /// Sender given name.
    pub first_name: String,
    /// Sender family name.
    pub last_name: String,
    /// Sender email.
    pub email: String,
    /// Sender phone.
    pub phone: String,
    /// Message body.
    pub message: String,
    /// When the message was received.
    pub created_at: DateTime<Utc>,
}

/// Data required to store a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessage {
    /// Sender given name.
    pub first_name: String,
    /// Sender family name.
    pub last_name: String,
    /// Sender email.
    pub email: String,
    /// Sender phone.
    pub phone: String,
    /// Message body.
    pub message: String,
}
