//! Admin-creation admission.
//!
//! Re-evaluated on every request from a fresh admin count: while no admin
//! exists anyone may create one; afterwards only an authenticated admin may.

use std::sync::Arc;

use tracing::{info, warn};

use medcare_core::error::AppError;
use medcare_database::store::UserStore;
use medcare_entity::user::{User, UserRole};

use crate::gate::authorize;
use crate::resolver::{AuthError, AuthResolver, TokenCarrier};

/// How an admin-creation request was admitted.
#[derive(Debug, Clone)]
pub enum AdminAdmission {
    /// No admin exists yet; the request was let through unauthenticated.
    Bootstrap,
    /// An existing admin authorized the request.
    Guarded(User),
}

/// Decides whether an admin-creation request may proceed.
#[derive(Debug, Clone)]
pub struct BootstrapPolicy {
    users: Arc<dyn UserStore>,
    resolver: AuthResolver,
}

impl BootstrapPolicy {
    /// Creates the policy.
    pub fn new(users: Arc<dyn UserStore>, resolver: AuthResolver) -> Self {
        Self { users, resolver }
    }

    /// Admit or reject an admin-creation request.
    pub async fn admit<C: TokenCarrier + ?Sized + Sync>(
        &self,
        carrier: &C,
    ) -> Result<AdminAdmission, AppError> {
        let admins = self.users.count_by_role(UserRole::Admin).await?;
        if admins == 0 {
            info!("No admin exists, admitting bootstrap admin creation");
            return Ok(AdminAdmission::Bootstrap);
        }

        let identity = match self.resolver.resolve(carrier).await {
            Ok(user) => Some(user),
            Err(AuthError::MissingToken) => {
                return Err(AppError::unauthenticated(
                    "Admin authentication required to add new admin.",
                ));
            }
            Err(AuthError::Token(_)) => {
                return Err(AppError::unauthenticated("Invalid or expired token."));
            }
            Err(AuthError::UserNotFound) => None,
            Err(AuthError::Store(e)) => return Err(e),
        };

        if let Err(e) = authorize(identity.as_ref(), &[UserRole::Admin]) {
            warn!(
                user_id = ?identity.as_ref().map(|u| u.id),
                "Rejected admin creation by non-admin"
            );
            return Err(e);
        }

        // authorize() only succeeds with an identity present
        identity
            .map(AdminAdmission::Guarded)
            .ok_or_else(|| AppError::forbidden("User not allowed to access this resource!"))
    }
}
