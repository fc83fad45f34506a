//! Role cookies carrying issued tokens.

use axum_extra::extract::cookie::{Cookie, SameSite};

use medcare_auth::resolver::cookie_name_for;
use medcare_core::config::{AuthConfig, MAX_COOKIE_TTL_DAYS};
use medcare_entity::user::UserRole;

/// Cookie delivering `token` to a user of `role`.
///
/// Secure cookies are sent cross-site (`SameSite=None`) so a dashboard on
/// another origin can use them; plain cookies stay `Lax`.
pub fn token_cookie(role: UserRole, token: String, config: &AuthConfig) -> Cookie<'static> {
    let days = i64::try_from(config.cookie_ttl_days.min(MAX_COOKIE_TTL_DAYS)).unwrap_or(0);
    let same_site = if config.cookie_secure {
        SameSite::None
    } else {
        SameSite::Lax
    };

    Cookie::build((cookie_name_for(role), token))
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(same_site)
        .max_age(time::Duration::days(days))
        .build()
}

/// Cookie that clears the token cookie of `role` in the browser.
pub fn expired_cookie(role: UserRole, config: &AuthConfig) -> Cookie<'static> {
    let mut cookie = Cookie::build((cookie_name_for(role), ""))
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .build();
    cookie.make_removal();
    cookie
}
