//! # medcare-core
//!
//! Core crate for the MedCare hospital backend. Contains configuration
//! schemas, the object-storage trait used for doctor avatars, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other MedCare crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
