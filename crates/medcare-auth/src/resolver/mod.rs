//! Authentication resolver.
//!
//! Turns the credentials on a request into the stored [`User`] they belong
//! to: extract a token ([`source`]), verify it with the [`TokenCodec`], then
//! load the subject from the [`UserStore`].

pub mod source;

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use medcare_core::error::AppError;
use medcare_database::store::UserStore;
use medcare_entity::user::User;

use crate::jwt::{TokenCodec, TokenError};

pub use source::{
    ADMIN_COOKIE, DOCTOR_COOKIE, PATIENT_COOKIE, TOKEN_SOURCES, TokenCarrier, TokenSource,
    cookie_name_for, extract_token,
};

/// Why a request could not be authenticated.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No source carried a token.
    #[error("User is not authenticated!")]
    MissingToken,
    /// A token was found but did not verify.
    #[error(transparent)]
    Token(#[from] TokenError),
    /// The token verified but its subject no longer exists.
    #[error("User not found for this token")]
    UserNotFound,
    /// The user store failed.
    #[error(transparent)]
    Store(#[from] AppError),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Store(inner) => inner,
            other => AppError::unauthenticated(other.to_string()),
        }
    }
}

/// Resolves request credentials to a stored user.
#[derive(Debug, Clone)]
pub struct AuthResolver {
    codec: Arc<TokenCodec>,
    users: Arc<dyn UserStore>,
}

impl AuthResolver {
    /// Creates a resolver over the given codec and user store.
    pub fn new(codec: Arc<TokenCodec>, users: Arc<dyn UserStore>) -> Self {
        Self { codec, users }
    }

    /// The codec used to verify tokens.
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Resolve the identity behind `carrier`.
    pub async fn resolve<C: TokenCarrier + ?Sized + Sync>(
        &self,
        carrier: &C,
    ) -> Result<User, AuthError> {
        let token = extract_token(carrier).ok_or(AuthError::MissingToken)?;
        self.resolve_token(token).await
    }

    /// Verify a raw token and load its subject.
    pub async fn resolve_token(&self, token: &str) -> Result<User, AuthError> {
        let user_id = self.codec.verify(token)?;
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        debug!(user_id = %user.id, role = %user.role, "Resolved identity");
        Ok(user)
    }
}
