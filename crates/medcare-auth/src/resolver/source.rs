//! Ordered token extraction.
//!
//! A request may carry a token in the `Authorization` header and in up to
//! three role cookies. [`TOKEN_SOURCES`] fixes the order in which they are
//! consulted; the first source yielding a non-empty token wins.

use medcare_entity::user::UserRole;

/// Cookie carrying an admin's token.
pub const ADMIN_COOKIE: &str = "adminToken";
/// Cookie carrying a patient's token.
pub const PATIENT_COOKIE: &str = "patientToken";
/// Cookie carrying a doctor's token.
pub const DOCTOR_COOKIE: &str = "doctorToken";

/// Read access to the credential-bearing parts of a request.
pub trait TokenCarrier {
    /// Raw value of the `Authorization` header, if any.
    fn authorization(&self) -> Option<&str>;

    /// Value of the named cookie, if any.
    fn cookie(&self, name: &str) -> Option<&str>;
}

/// One place a token may be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    /// `Authorization: Bearer <token>`.
    BearerHeader,
    /// A named cookie.
    Cookie(&'static str),
}

/// Sources in precedence order: header, then admin, patient and doctor cookies.
pub const TOKEN_SOURCES: [TokenSource; 4] = [
    TokenSource::BearerHeader,
    TokenSource::Cookie(ADMIN_COOKIE),
    TokenSource::Cookie(PATIENT_COOKIE),
    TokenSource::Cookie(DOCTOR_COOKIE),
];

impl TokenSource {
    /// The token this source finds in `carrier`, if non-empty.
    pub fn extract<'a, C: TokenCarrier + ?Sized>(&self, carrier: &'a C) -> Option<&'a str> {
        let raw = match self {
            Self::BearerHeader => carrier
                .authorization()
                .and_then(|value| value.strip_prefix("Bearer "))?,
            Self::Cookie(name) => carrier.cookie(name)?,
        };
        let token = raw.trim();
        (!token.is_empty()).then_some(token)
    }
}

/// Run the source pipeline and return the first token found.
pub fn extract_token<C: TokenCarrier + ?Sized>(carrier: &C) -> Option<&str> {
    TOKEN_SOURCES
        .iter()
        .find_map(|source| source.extract(carrier))
}

/// Name of the cookie used to deliver a token to a user of `role`.
pub fn cookie_name_for(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => ADMIN_COOKIE,
        UserRole::Doctor => DOCTOR_COOKIE,
        UserRole::Patient => PATIENT_COOKIE,
    }
}
