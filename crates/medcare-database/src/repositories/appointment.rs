//! Appointment repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use medcare_core::error::{AppError, ErrorKind};
use medcare_core::result::AppResult;
use medcare_entity::appointment::{
    Appointment, AppointmentStatus, CreateAppointment, UpdateAppointment,
};

use crate::store::AppointmentStore;

/// PostgreSQL-backed [`AppointmentStore`].
#[derive(Debug, Clone)]
pub struct AppointmentRepository {
    pool: PgPool,
}

impl AppointmentRepository {
    /// Create a new appointment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentStore for AppointmentRepository {
    async fn create(&self, data: &CreateAppointment) -> AppResult<Appointment> {
        let now = Utc::now();
        sqlx::query_as::<_, Appointment>(
            "INSERT INTO appointments (id, first_name, last_name, email, phone, pid, dob, gender, \
                                       appointment_date, department, doctor_first_name, \
                                       doctor_last_name, has_visited, address, doctor_id, \
                                       patient_id, status, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, \
                     $18, $18) \
             RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(data.pid)
        .bind(data.dob)
        .bind(data.gender)
        .bind(&data.appointment_date)
        .bind(&data.department)
        .bind(&data.doctor_first_name)
        .bind(&data.doctor_last_name)
        .bind(data.has_visited)
        .bind(&data.address)
        .bind(data.doctor_id)
        .bind(data.patient_id)
        .bind(AppointmentStatus::Pending)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create appointment", e))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Appointment>> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find appointment", e)
            })
    }

    async fn list_all(&self) -> AppResult<Vec<Appointment>> {
        sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list appointments", e))
    }

    async fn list_by_doctor(&self, doctor_id: Uuid) -> AppResult<Vec<Appointment>> {
        sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments WHERE doctor_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(doctor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to list appointments by doctor",
                e,
            )
        })
    }

    async fn update(&self, id: Uuid, data: &UpdateAppointment) -> AppResult<Option<Appointment>> {
        sqlx::query_as::<_, Appointment>(
            "UPDATE appointments SET status = COALESCE($2, status), \
                                     has_visited = COALESCE($3, has_visited), \
                                     updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.status)
        .bind(data.has_visited)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update appointment", e))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete appointment", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
