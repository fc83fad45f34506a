//! Response DTOs.
//!
//! Field names follow the wire format the MedCare frontends consume:
//! camelCase for people, with a few legacy snake_case appointment fields.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use medcare_entity::appointment::{Appointment, AppointmentStatus};
use medcare_entity::message::Message;
use medcare_entity::user::{Gender, User, UserRole};

/// Standard success response wrapper. The payload's fields are inlined next
/// to `success`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response payload.
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Avatar reference.
#[derive(Debug, Clone, Serialize)]
pub struct AvatarResponse {
    pub public_id: String,
    pub url: String,
}

/// User as returned to clients. Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// External identifier (`did` for patients and doctors, `Aid` for admins).
    pub did: String,
    pub dob: NaiveDate,
    pub gender: Gender,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_avatar: Option<AvatarResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(u: &User) -> Self {
        let doc_avatar = match (&u.avatar_public_id, &u.avatar_url) {
            (Some(public_id), Some(url)) => Some(AvatarResponse {
                public_id: public_id.clone(),
                url: url.clone(),
            }),
            _ => None,
        };

        Self {
            id: u.id,
            first_name: u.first_name.clone(),
            last_name: u.last_name.clone(),
            email: u.email.clone(),
            phone: u.phone.clone(),
            did: u.external_id.clone(),
            dob: u.dob,
            gender: u.gender,
            role: u.role,
            doctor_department: u.doctor_department.clone(),
            doc_avatar,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// Denormalized doctor name on an appointment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDoctor {
    pub first_name: String,
    pub last_name: String,
}

/// Appointment as returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub pid: Option<i64>,
    pub dob: NaiveDate,
    pub gender: Gender,
    pub appointment_date: String,
    pub department: String,
    pub doctor: AppointmentDoctor,
    #[serde(rename = "hasVisited")]
    pub has_visited: bool,
    pub address: String,
    #[serde(rename = "doctorId")]
    pub doctor_id: Uuid,
    #[serde(rename = "patientId")]
    pub patient_id: Option<i64>,
    pub status: AppointmentStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<&Appointment> for AppointmentResponse {
    fn from(a: &Appointment) -> Self {
        Self {
            id: a.id,
            first_name: a.first_name.clone(),
            last_name: a.last_name.clone(),
            email: a.email.clone(),
            phone: a.phone.clone(),
            pid: a.pid,
            dob: a.dob,
            gender: a.gender,
            appointment_date: a.appointment_date.clone(),
            department: a.department.clone(),
            doctor: AppointmentDoctor {
                first_name: a.doctor_first_name.clone(),
                last_name: a.doctor_last_name.clone(),
            },
            has_visited: a.has_visited,
            address: a.address.clone(),
            doctor_id: a.doctor_id,
            patient_id: a.patient_id,
            status: a.status,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

/// Contact message as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Message> for MessageResponse {
    fn from(m: &Message) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name.clone(),
            last_name: m.last_name.clone(),
            email: m.email.clone(),
            phone: m.phone.clone(),
            message: m.message.clone(),
            created_at: m.created_at,
        }
    }
}

/// A bare confirmation.
#[derive(Debug, Clone, Serialize)]
pub struct MessagePayload {
    pub message: String,
}

impl MessagePayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of a registration, login or admin creation.
#[derive(Debug, Clone, Serialize)]
pub struct AuthPayload {
    pub message: String,
    pub user: UserResponse,
    pub token: String,
}

/// A single user.
#[derive(Debug, Clone, Serialize)]
pub struct UserPayload {
    pub user: UserResponse,
}

/// A single doctor, optionally with a confirmation.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub doctor: UserResponse,
}

/// Every doctor.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorsPayload {
    pub doctors: Vec<UserResponse>,
}

/// A single appointment with a confirmation.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentPayload {
    pub message: String,
    pub appointment: AppointmentResponse,
}

/// A list of appointments.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentsPayload {
    pub appointments: Vec<AppointmentResponse>,
}

/// Every message.
#[derive(Debug, Clone, Serialize)]
pub struct MessagesPayload {
    pub messages: Vec<MessageResponse>,
}

/// Health check payload.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
