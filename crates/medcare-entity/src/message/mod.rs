//! Contact-form message entity.

pub mod model;

pub use model::{CreateMessage, Message};
