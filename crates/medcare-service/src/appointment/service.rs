//! Appointment booking, listing and administration.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use medcare_core::error::AppError;
use medcare_core::result::AppResult;
use medcare_database::store::AppointmentStore;
use medcare_entity::appointment::{Appointment, AppointmentStatus, UpdateAppointment};
use medcare_entity::user::User;

use super::reconciler::{AppointmentReconciler, AppointmentRequest};

/// Body of an appointment update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAppointmentRequest {
    pub status: Option<String>,
    #[serde(rename = "hasVisited")]
    pub has_visited: Option<bool>,
}

/// Appointment use cases.
#[derive(Debug, Clone)]
pub struct AppointmentService {
    appointments: Arc<dyn AppointmentStore>,
    reconciler: AppointmentReconciler,
}

impl AppointmentService {
    /// Creates a new appointment service.
    pub fn new(appointments: Arc<dyn AppointmentStore>, reconciler: AppointmentReconciler) -> Self {
        Self {
            appointments,
            reconciler,
        }
    }

    /// Book an appointment on behalf of `identity`.
    pub async fn book(
        &self,
        identity: Option<&User>,
        req: &AppointmentRequest,
    ) -> AppResult<Appointment> {
        let record = self.reconciler.reconcile(identity, req).await?;
        let appointment = self.appointments.create(&record).await?;

        info!(
            appointment_id = %appointment.id,
            doctor_id = %appointment.doctor_id,
            booked_by = ?identity.map(|u| u.id),
            "Appointment booked"
        );
        Ok(appointment)
    }

    /// Every appointment.
    pub async fn list_all(&self) -> AppResult<Vec<Appointment>> {
        self.appointments.list_all().await
    }

    /// Appointments booked with `doctor`.
    pub async fn list_for_doctor(&self, doctor: &User) -> AppResult<Vec<Appointment>> {
        self.appointments.list_by_doctor(doctor.id).await
    }

    /// Change status and/or visited flag. An unknown id is reported before
    /// the body is checked.
    pub async fn update(&self, id: Uuid, req: UpdateAppointmentRequest) -> AppResult<Appointment> {
        if self.appointments.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("Appointment not found!"));
        }

        let status = req
            .status
            .as_deref()
            .map(str::parse::<AppointmentStatus>)
            .transpose()?;
        let update = UpdateAppointment {
            status,
            has_visited: req.has_visited,
        };
        if update.is_empty() {
            return Err(AppError::validation("Provide status or hasVisited to update!"));
        }

        let appointment = self
            .appointments
            .update(id, &update)
            .await?
            .ok_or_else(|| AppError::not_found("Appointment not found!"))?;

        info!(appointment_id = %id, status = %appointment.status, "Appointment updated");
        Ok(appointment)
    }

    /// Remove an appointment.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.appointments.delete(id).await? {
            return Err(AppError::not_found("Appointment Not Found!"));
        }
        info!(appointment_id = %id, "Appointment deleted");
        Ok(())
    }
}
