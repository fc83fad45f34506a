//! Appointment handlers.

use axum::Json;
use axum::extract::{Path, State};

use medcare_entity::user::UserRole;
use medcare_service::appointment::{AppointmentRequest, UpdateAppointmentRequest};

use crate::dto::response::{
    ApiResponse, AppointmentPayload, AppointmentResponse, AppointmentsPayload, MessagePayload,
};
use crate::error::ApiError;
use crate::extractors::{AppJson, AuthUser, parse_uuid};
use crate::middleware::rbac::{require_admin, require_doctor, require_roles};
use crate::state::AppState;

/// POST /appointment/post
pub async fn post_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(req): AppJson<AppointmentRequest>,
) -> Result<Json<ApiResponse<AppointmentPayload>>, ApiError> {
    require_roles(&auth, &UserRole::ALL)?;

    let appointment = state
        .appointment_service
        .book(Some(auth.user()), &req)
        .await?;

    Ok(Json(ApiResponse::ok(AppointmentPayload {
        message: "Appointment Sent!".to_string(),
        appointment: AppointmentResponse::from(&appointment),
    })))
}

/// GET /appointment/getall, GET /user/appointment/getall
pub async fn list_appointments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<AppointmentsPayload>>, ApiError> {
    require_admin(&auth)?;

    let appointments = state.appointment_service.list_all().await?;
    Ok(Json(ApiResponse::ok(AppointmentsPayload {
        appointments: appointments.iter().map(AppointmentResponse::from).collect(),
    })))
}

/// GET /appointment/doctor
pub async fn doctor_appointments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<AppointmentsPayload>>, ApiError> {
    require_doctor(&auth)?;

    let appointments = state
        .appointment_service
        .list_for_doctor(auth.user())
        .await?;
    Ok(Json(ApiResponse::ok(AppointmentsPayload {
        appointments: appointments.iter().map(AppointmentResponse::from).collect(),
    })))
}

/// PUT /appointment/update/{id}
pub async fn update_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    body: Result<AppJson<UpdateAppointmentRequest>, ApiError>,
) -> Result<Json<ApiResponse<AppointmentPayload>>, ApiError> {
    require_admin(&auth)?;
    let id = parse_uuid(&id)?;
    let AppJson(req) = body?;

    let appointment = state.appointment_service.update(id, req).await?;

    Ok(Json(ApiResponse::ok(AppointmentPayload {
        message: "Appointment Status Updated!".to_string(),
        appointment: AppointmentResponse::from(&appointment),
    })))
}

/// DELETE /appointment/delete/{id}
pub async fn delete_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessagePayload>>, ApiError> {
    require_admin(&auth)?;
    let id = parse_uuid(&id)?;

    state.appointment_service.delete(id).await?;

    Ok(Json(ApiResponse::ok(MessagePayload::new("Appointment Deleted!"))))
}
