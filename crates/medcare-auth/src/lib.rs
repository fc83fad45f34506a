//! # medcare-auth
//!
//! Authentication and authorization for the MedCare backend.
//!
//! ## Modules
//!
//! - `jwt`: signed, expiring tokens carrying a user id
//! - `password`: Argon2id password hashing
//! - `resolver`: token extraction from the bearer header or role cookies, and
//!   resolution of the token to a stored user
//! - `gate`: role checks against an explicit allow-list
//! - `bootstrap`: admin creation with the first-admin exception

pub mod bootstrap;
pub mod gate;
pub mod jwt;
pub mod password;
pub mod resolver;

pub use bootstrap::{AdminAdmission, BootstrapPolicy};
pub use gate::authorize;
pub use jwt::{Claims, TokenCodec, TokenError};
pub use password::PasswordHasher;
pub use resolver::{AuthError, AuthResolver, TokenCarrier, cookie_name_for};
