//! Convenience result type alias for MedCare.

use crate::error::AppError;

/// A specialized `Result` type for MedCare operations.
pub type AppResult<T> = Result<T, AppError>;
