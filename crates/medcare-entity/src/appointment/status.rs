//! Appointment status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where an appointment stands. New appointments start as `Pending`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "appointment_status")]
pub enum AppointmentStatus {
    /// Awaiting an admin decision.
    #[default]
    Pending,
    /// Confirmed by an admin.
    Accepted,
    /// Declined by an admin.
    Rejected,
}

impl AppointmentStatus {
    /// Return the status as stored and transmitted.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = medcare_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Accepted" => Ok(Self::Accepted),
            "Rejected" => Ok(Self::Rejected),
            _ => Err(medcare_core::AppError::validation(format!(
                "`{s}` is not a valid appointment status!"
            ))),
        }
    }
}
