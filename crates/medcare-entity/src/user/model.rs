//! User entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::gender::Gender;
use super::role::UserRole;

/// A person known to the hospital, in any of the three roles.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Internal storage key.
    pub id: Uuid,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address, unique across all roles.
    pub email: String,
    /// Ten-digit phone number.
    pub phone: String,
    /// Date of birth.
    pub dob: NaiveDate,
    /// Gender.
    pub gender: Gender,
    /// Role tag.
    pub role: UserRole,
    /// Caller-supplied external identifier (`did` / `Aid`).
    pub external_id: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Department label, doctors only.
    pub doctor_department: Option<String>,
    /// Object-store id of the avatar, doctors only.
    pub avatar_public_id: Option<String>,
    /// Public avatar URL, doctors only.
    pub avatar_url: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Check if this user is a doctor.
    pub fn is_doctor(&self) -> bool {
        self.role == UserRole::Doctor
    }

    /// `"First Last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Date of birth.
    pub dob: NaiveDate,
    /// Gender.
    pub gender: Gender,
    /// Role to assign.
    pub role: UserRole,
    /// External identifier.
    pub external_id: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Department, doctors only.
    pub doctor_department: Option<String>,
    /// Avatar object id, doctors only.
    pub avatar_public_id: Option<String>,
    /// Avatar URL, doctors only.
    pub avatar_url: Option<String>,
}
