//! # medcare-api
//!
//! HTTP API layer for MedCare built on Axum.
//!
//! Provides the user, appointment and message endpoints, the credential
//! extractor that feeds the authentication resolver, role guards, role
//! cookies, CORS and request logging, and the mapping from [`AppError`]
//! to the `{ success, message }` envelope.
//!
//! [`AppError`]: medcare_core::error::AppError

pub mod app;
pub mod cookies;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
