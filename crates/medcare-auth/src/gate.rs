//! Role gate.

use medcare_core::error::AppError;
use medcare_entity::user::{User, UserRole};

/// Allow `identity` through only if its role is in `allowed`.
///
/// An absent identity is always rejected; an empty `allowed` admits nobody.
pub fn authorize(identity: Option<&User>, allowed: &[UserRole]) -> Result<(), AppError> {
    match identity {
        Some(user) if allowed.contains(&user.role) => Ok(()),
        Some(user) => Err(forbidden(&user.role.to_string())),
        None => Err(forbidden("User")),
    }
}

fn forbidden(who: &str) -> AppError {
    AppError::forbidden(format!("{who} not allowed to access this resource!"))
}
