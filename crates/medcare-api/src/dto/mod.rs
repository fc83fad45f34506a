//! Data transfer objects for API responses.
//!
//! Request bodies are deserialized straight into the service-layer request
//! types.

pub mod response;
