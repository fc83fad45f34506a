//! In-memory appointment store.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use medcare_core::result::AppResult;
use medcare_entity::appointment::{
    Appointment, AppointmentStatus, CreateAppointment, UpdateAppointment,
};

use crate::store::AppointmentStore;

/// Process-local [`AppointmentStore`].
#[derive(Debug, Default)]
pub struct MemoryAppointmentStore {
    appointments: RwLock<Vec<Appointment>>,
}

impl MemoryAppointmentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AppointmentStore for MemoryAppointmentStore {
    async fn create(&self, data: &CreateAppointment) -> AppResult<Appointment> {
        let now = Utc::now();
        let appointment = Appointment {
            id: Uuid::now_v7(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            email: data.email.clone(),
            phone: data.phone.clone(),
            pid: data.pid,
            dob: data.dob,
            gender: data.gender,
            appointment_date: data.appointment_date.clone(),
            department: data.department.clone(),
            doctor_first_name: data.doctor_first_name.clone(),
            doctor_last_name: data.doctor_last_name.clone(),
            has_visited: data.has_visited,
            address: data.address.clone(),
            doctor_id: data.doctor_id,
            patient_id: data.patient_id,
            status: AppointmentStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        self.appointments.write().await.push(appointment.clone());
        Ok(appointment)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Appointment>> {
        Ok(self
            .appointments
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn list_all(&self) -> AppResult<Vec<Appointment>> {
        Ok(self.appointments.read().await.clone())
    }

    async fn list_by_doctor(&self, doctor_id: Uuid) -> AppResult<Vec<Appointment>> {
        Ok(self
            .appointments
            .read()
            .await
            .iter()
            .filter(|a| a.doctor_id == doctor_id)
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, data: &UpdateAppointment) -> AppResult<Option<Appointment>> {
        let mut appointments = self.appointments.write().await;
        let Some(appointment) = appointments.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        if let Some(status) = data.status {
            appointment.status = status;
        }
        if let Some(has_visited) = data.has_visited {
            appointment.has_visited = has_visited;
        }
        appointment.updated_at = Utc::now();
        Ok(Some(appointment.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut appointments = self.appointments.write().await;
        let before = appointments.len();
        appointments.retain(|a| a.id != id);
        Ok(appointments.len() != before)
    }
}
