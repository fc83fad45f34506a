//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod path;

pub use auth::{AuthUser, RequestCredentials};
pub use json::AppJson;
pub use path::parse_uuid;
