//! Appointment entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::user::Gender;

use super::status::AppointmentStatus;

/// A booking of a patient with a doctor.
///
/// `pid` is the identifier submitted with the booking form, while
/// `patient_id` is derived from who made the booking. The two are kept
/// independently and are allowed to differ.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    /// Internal storage key.
    pub id: Uuid,
    /// Patient given name.
    pub first_name: String,
    /// Patient family name.
    pub last_name: String,
    /// Patient contact email.
    pub email: String,
    /// Patient contact phone.
    pub phone: String,
    /// Patient identifier as submitted.
    pub pid: Option<i64>,
    /// Patient date of birth.
    pub dob: NaiveDate,
    /// Patient gender.
    pub gender: Gender,
    /// Requested date, kept as the caller sent it.
    pub appointment_date: String,
    /// Department the doctor belongs to.
    pub department: String,
    /// Doctor given name, denormalized.
    pub doctor_first_name: String,
    /// Doctor family name, denormalized.
    pub doctor_last_name: String,
    /// Whether the patient visited before.
    pub has_visited: bool,
    /// Free-text address.
    pub address: String,
    /// The doctor's user id.
    pub doctor_id: Uuid,
    /// Patient identifier derived from the booking identity.
    pub patient_id: Option<i64>,
    /// Current status.
    pub status: AppointmentStatus,
    /// When the appointment was created.
    pub created_at: DateTime<Utc>,
    /// When the appointment was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create an appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointment {
    /// Patient given name.
    pub first_name: String,
    /// Patient family name.
    pub last_name: String,
    /// Patient contact email.
    pub email: String,
    /// Patient contact phone.
    pub phone: String,
    /// Submitted patient identifier.
    pub pid: Option<i64>,
    /// Patient date of birth.
    pub dob: NaiveDate,
    /// Patient gender.
    pub gender: Gender,
    /// Requested date.
    pub appointment_date: String,
    /// Department.
    pub department: String,
    /// Doctor given name.
    pub doctor_first_name: String,
    /// Doctor family name.
    pub doctor_last_name: String,
    /// Whether the patient visited before.
    pub has_visited: bool,
    /// Free-text address.
    pub address: String,
    /// Resolved doctor id.
    pub doctor_id: Uuid,
    /// Derived patient identifier.
    pub patient_id: Option<i64>,
}

/// Mutable fields of an appointment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAppointment {
    /// New status.
    pub status: Option<AppointmentStatus>,
    /// New visited flag.
    pub has_visited: Option<bool>,
}

impl UpdateAppointment {
    /// True when the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.has_visited.is_none()
    }
}
