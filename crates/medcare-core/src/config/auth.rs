//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Longest accepted token lifetime: ten years.
pub const MAX_TOKEN_TTL_HOURS: u64 = 24 * 365 * 10;
/// Longest accepted cookie lifetime: ten years.
pub const MAX_COOKIE_TTL_DAYS: u64 = 365 * 10;

/// Token, cookie and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token TTL in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Lifetime of the role cookie carrying the token, in days.
    #[serde(default = "default_cookie_ttl")]
    pub cookie_ttl_days: u64,
    /// Whether role cookies carry the `Secure` attribute.
    #[serde(default)]
    pub cookie_secure: bool,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_hours: default_token_ttl(),
            cookie_ttl_days: default_cookie_ttl(),
            cookie_secure: false,
            password_min_length: default_password_min(),
        }
    }
}

impl AuthConfig {
    /// Reject lifetimes that cannot be represented as durations.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.token_ttl_hours == 0 || self.token_ttl_hours > MAX_TOKEN_TTL_HOURS {
            return Err(AppError::configuration(format!(
                "auth.token_ttl_hours must be between 1 and {MAX_TOKEN_TTL_HOURS}, got {}",
                self.token_ttl_hours
            )));
        }
        if self.cookie_ttl_days == 0 || self.cookie_ttl_days > MAX_COOKIE_TTL_DAYS {
            return Err(AppError::configuration(format!(
                "auth.cookie_ttl_days must be between 1 and {MAX_COOKIE_TTL_DAYS}, got {}",
                self.cookie_ttl_days
            )));
        }
        Ok(())
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    24 * 7
}

fn default_cookie_ttl() -> u64 {
    7
}

fn default_password_min() -> usize {
    8
}
