//! Contact messages.

pub mod service;

pub use service::{MessageService, SendMessageRequest};
