//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three roles sharing the user collection.
///
/// Role names are matched exactly and case-sensitively; `"admin"` is not
/// a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role")]
pub enum UserRole {
    /// Hospital administrator, manages doctors and appointments.
    Admin,
    /// Doctor, sees the appointments booked against them.
    Doctor,
    /// Patient, registers publicly and books appointments.
    Patient,
}

impl UserRole {
    /// All roles, in declaration order.
    pub const ALL: [UserRole; 3] = [Self::Admin, Self::Doctor, Self::Patient];

    /// Return the role name as stored and transmitted.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Doctor => "Doctor",
            Self::Patient => "Patient",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = medcare_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Self::Admin),
            "Doctor" => Ok(Self::Doctor),
            "Patient" => Ok(Self::Patient),
            _ => Err(medcare_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: Admin, Doctor, Patient"
            ))),
        }
    }
}
