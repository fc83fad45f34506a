//! Role guards applied inside handlers after authentication.

use medcare_auth::gate::authorize;
use medcare_core::error::AppError;
use medcare_entity::user::UserRole;

use crate::extractors::AuthUser;

/// Checks that the authenticated user holds one of `roles`.
pub fn require_roles(auth: &AuthUser, roles: &[UserRole]) -> Result<(), AppError> {
    authorize(Some(auth.user()), roles)
}

/// Checks that the authenticated user has the Admin role.
pub fn require_admin(auth: &AuthUser) -> Result<(), AppError> {
    require_roles(auth, &[UserRole::Admin])
}

/// Checks that the authenticated user has the Doctor role.
pub fn require_doctor(auth: &AuthUser) -> Result<(), AppError> {
    require_roles(auth, &[UserRole::Doctor])
}

/// Checks that the authenticated user has the Patient role.
pub fn require_patient(auth: &AuthUser) -> Result<(), AppError> {
    require_roles(auth, &[UserRole::Patient])
}
