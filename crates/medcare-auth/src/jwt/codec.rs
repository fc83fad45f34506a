//! Stateless HS256 token codec.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;
use uuid::Uuid;

use medcare_core::config::{AuthConfig, MAX_TOKEN_TTL_HOURS};
use medcare_core::error::AppError;

use super::claims::Claims;

/// Why a token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Bad signature, malformed payload, or not a token at all.
    #[error("Json Web Token is invalid, Try again!")]
    Invalid,
    /// Well-formed and correctly signed, but past its expiry.
    #[error("Json Web Token is expired, Try again!")]
    Expired,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::unauthenticated(err.to_string())
    }
}

/// Issues and verifies signed tokens binding a user id and an expiry.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenCodec {
    /// Creates a codec from auth configuration. The lifetime is capped at
    /// [`MAX_TOKEN_TTL_HOURS`].
    pub fn new(config: &AuthConfig) -> Self {
        let hours = config.token_ttl_hours.min(MAX_TOKEN_TTL_HOURS);
        Self::with_ttl(
            config.jwt_secret.as_bytes(),
            Duration::hours(i64::try_from(hours).unwrap_or(0)),
        )
    }

    /// Creates a codec with an explicit secret and lifetime.
    pub fn with_ttl(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Issues a token for `user_id` valid from now.
    pub fn issue(&self, user_id: Uuid) -> Result<String, AppError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issues a token as if it had been minted at `issued_at`.
    pub fn issue_at(&self, user_id: Uuid, issued_at: DateTime<Utc>) -> Result<String, AppError> {
        let claims = Claims::new(user_id, issued_at, self.ttl);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }

    /// Verifies `token` and returns its subject.
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        self.decode_claims(token).map(|claims| claims.sub)
    }

    /// Verifies `token` and returns all of its claims.
    pub fn decode_claims(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }
}
