//! User domain entities.

pub mod gender;
pub mod model;
pub mod role;

pub use gender::Gender;
pub use model::{CreateUser, User};
pub use role::UserRole;
