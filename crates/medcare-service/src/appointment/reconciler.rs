//! Appointment reconciliation.
//!
//! Turns a booking form plus the (optional) booking identity into a
//! storable appointment: the doctor is found by name and department, and
//! the numeric `patient_id` is derived from the identity's role. The
//! submitted `pid` is stored as given and is never reconciled with
//! `patient_id`.

use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use medcare_core::error::AppError;
use medcare_core::result::AppResult;
use medcare_database::store::UserStore;
use medcare_entity::appointment::CreateAppointment;
use medcare_entity::user::{User, UserRole};

use crate::validation::{FILL_FULL_FORM, FieldErrors, Scalar, filled, filled_scalar, parse_number};

const PID_NOT_NUMBER: &str = "PID must be a valid number.";

/// Booking form as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentRequest {
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<Scalar>,
    pub pid: Option<Scalar>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub appointment_date: Option<String>,
    pub department: Option<String>,
    #[serde(rename = "doctor_firstName")]
    pub doctor_first_name: Option<String>,
    #[serde(rename = "doctor_lastName")]
    pub doctor_last_name: Option<String>,
    #[serde(rename = "hasVisited")]
    pub has_visited: Option<bool>,
    pub address: Option<String>,
}

/// Resolves doctors and patient identifiers for new appointments.
#[derive(Debug, Clone)]
pub struct AppointmentReconciler {
    users: Arc<dyn UserStore>,
}

impl AppointmentReconciler {
    /// Creates a reconciler over the user store.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Validate `req` in the context of `identity` and produce the record
    /// to persist.
    pub async fn reconcile(
        &self,
        identity: Option<&User>,
        req: &AppointmentRequest,
    ) -> AppResult<CreateAppointment> {
        let submitted_pid = filled_scalar(&req.pid);

        let (Some(first_name), Some(last_name), Some(email), Some(phone)) = (
            filled(&req.first_name),
            filled(&req.last_name),
            filled(&req.email),
            filled_scalar(&req.phone),
        ) else {
            return Err(AppError::validation(FILL_FULL_FORM));
        };
        let (Some(dob), Some(gender), Some(appointment_date), Some(department)) = (
            filled(&req.dob),
            filled(&req.gender),
            filled(&req.appointment_date),
            filled(&req.department),
        ) else {
            return Err(AppError::validation(FILL_FULL_FORM));
        };
        let (Some(doctor_first_name), Some(doctor_last_name), Some(address)) = (
            filled(&req.doctor_first_name),
            filled(&req.doctor_last_name),
            filled(&req.address),
        ) else {
            return Err(AppError::validation(FILL_FULL_FORM));
        };
        if submitted_pid.is_none() && identity.is_none() {
            return Err(AppError::validation(FILL_FULL_FORM));
        }

        let doctor = self
            .users
            .find_doctor(doctor_first_name, doctor_last_name, department)
            .await?
            .ok_or_else(|| AppError::not_found("Doctor not found"))?;

        let patient_id = derive_patient_id(identity, submitted_pid)?;
        let pid = submitted_pid
            .map(|p| p.as_number().ok_or_else(|| AppError::validation(PID_NOT_NUMBER)))
            .transpose()?;

        let phone = phone.to_text();
        let mut errors = FieldErrors::new();
        errors.person(first_name, last_name, email, &phone);
        let gender = errors.gender(gender);
        let dob = errors.dob(dob);
        errors.check(
            pid.is_none_or(|p| p >= 0),
            "PID must be a positive number!",
        );
        errors.finish()?;
        let (Some(gender), Some(dob)) = (gender, dob) else {
            return Err(AppError::validation("Invalid gender or dob"));
        };

        debug!(
            doctor_id = %doctor.id,
            ?pid,
            ?patient_id,
            role = ?identity.map(|u| u.role),
            "Reconciled appointment"
        );

        Ok(CreateAppointment {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            phone,
            pid,
            dob,
            gender,
            appointment_date: appointment_date.to_string(),
            department: department.to_string(),
            doctor_first_name: doctor_first_name.to_string(),
            doctor_last_name: doctor_last_name.to_string(),
            has_visited: req.has_visited.unwrap_or(false),
            address: address.to_string(),
            doctor_id: doctor.id,
            patient_id,
        })
    }
}

/// Numeric patient identifier implied by who is booking.
///
/// Patients are identified by their own external id regardless of any
/// submitted `pid`. Admins must name the patient; doctors and anonymous
/// callers may.
fn derive_patient_id(identity: Option<&User>, submitted: Option<&Scalar>) -> AppResult<Option<i64>> {
    let coerce = |s: &Scalar| {
        s.as_number()
            .ok_or_else(|| AppError::validation(PID_NOT_NUMBER))
    };

    match identity.map(|u| (u.role, u)) {
        Some((UserRole::Patient, user)) => {
            if user.external_id.trim().is_empty() {
                return Err(AppError::validation(
                    "Logged-in patient does not have a numeric DID.",
                ));
            }
            parse_number(&user.external_id)
                .map(Some)
                .ok_or_else(|| AppError::validation(PID_NOT_NUMBER))
        }
        Some((UserRole::Admin, _)) => {
            let pid = submitted.ok_or_else(|| {
                AppError::validation("PID is required when admin creates appointment.")
            })?;
            coerce(pid).map(Some)
        }
        Some((UserRole::Doctor, _)) | None => submitted.map(coerce).transpose(),
    }
}
