//! `AuthUser` extractor: resolves the bearer header or a role cookie to a
//! stored user.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum_extra::extract::cookie::CookieJar;

use medcare_auth::resolver::TokenCarrier;
use medcare_core::error::AppError;
use medcare_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// The credential-bearing parts of a request, as seen by the resolver.
#[derive(Debug)]
pub struct RequestCredentials<'a> {
    authorization: Option<&'a str>,
    cookies: &'a CookieJar,
}

impl<'a> RequestCredentials<'a> {
    /// Borrow credentials from request headers and the parsed cookie jar.
    pub fn new(headers: &'a HeaderMap, cookies: &'a CookieJar) -> Self {
        Self {
            authorization: headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
            cookies,
        }
    }
}

impl TokenCarrier for RequestCredentials<'_> {
    fn authorization(&self) -> Option<&str> {
        self.authorization
    }

    fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(|c| c.value())
    }
}

/// Authenticated user available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl AuthUser {
    /// Returns the inner `User`.
    pub fn user(&self) -> &User {
        &self.0
    }

    /// Consumes the extractor, returning the user.
    pub fn into_inner(self) -> User {
        self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let credentials = RequestCredentials::new(&parts.headers, &jar);

        let user = state
            .resolver
            .resolve(&credentials)
            .await
            .map_err(AppError::from)?;

        Ok(AuthUser(user))
    }
}
