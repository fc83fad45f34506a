//! User handlers: registration, login, admin and doctor management,
//! profiles and logout.

use axum::Json;
use axum::extract::multipart::{Multipart, MultipartError, MultipartRejection};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum_extra::extract::cookie::CookieJar;

use medcare_auth::bootstrap::AdminAdmission;
use medcare_core::error::AppError;
use medcare_entity::user::UserRole;
use medcare_service::user::{
    AddAdminRequest, AddDoctorRequest, AuthSession, AvatarUpload, LoginRequest,
    RegisterPatientRequest,
};

use crate::cookies::{expired_cookie, token_cookie};
use crate::dto::response::{
    ApiResponse, AuthPayload, DoctorPayload, DoctorsPayload, MessagePayload, UserPayload,
    UserResponse,
};
use crate::error::ApiError;
use crate::extractors::{AppJson, AuthUser, RequestCredentials, parse_uuid};
use crate::middleware::rbac::{require_admin, require_doctor, require_patient};
use crate::state::AppState;

type AuthReply = (StatusCode, CookieJar, Json<ApiResponse<AuthPayload>>);
type LogoutReply = (StatusCode, CookieJar, Json<ApiResponse<MessagePayload>>);

/// Multipart field carrying the doctor's avatar.
const AVATAR_FIELD: &str = "docAvatar";

/// Shown when the doctor form cannot be read as multipart.
const INVALID_FORM: &str = "Invalid form data";

fn form_error(err: MultipartError) -> AppError {
    tracing::debug!(detail = %err.body_text(), "Rejected multipart body");
    AppError::validation(INVALID_FORM)
}

fn auth_reply(status: StatusCode, jar: CookieJar, message: &str, session: AuthSession) -> AuthReply {
    (
        status,
        jar,
        Json(ApiResponse::ok(AuthPayload {
            message: message.to_string(),
            user: UserResponse::from(&session.user),
            token: session.token,
        })),
    )
}

fn with_token_cookie(state: &AppState, jar: CookieJar, session: &AuthSession) -> CookieJar {
    jar.add(token_cookie(
        session.user.role,
        session.token.clone(),
        &state.config.auth,
    ))
}

fn logout_reply(state: &AppState, jar: CookieJar, role: UserRole, message: &str) -> LogoutReply {
    (
        StatusCode::CREATED,
        jar.add(expired_cookie(role, &state.config.auth)),
        Json(ApiResponse::ok(MessagePayload::new(message))),
    )
}

/// POST /user/patient/register
pub async fn register_patient(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(req): AppJson<RegisterPatientRequest>,
) -> Result<AuthReply, ApiError> {
    let session = state.user_service.register_patient(req).await?;
    let jar = with_token_cookie(&state, jar, &session);
    Ok(auth_reply(StatusCode::CREATED, jar, "Registered Successfully", session))
}

/// POST /user/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<AuthReply, ApiError> {
    let session = state.user_service.login(req).await?;
    let jar = with_token_cookie(&state, jar, &session);
    Ok(auth_reply(StatusCode::OK, jar, "Login Successfully!", session))
}

/// POST /user/admin/addnew
///
/// Open while no admin exists, admin-only afterwards. Only the bootstrap
/// admin gets a cookie; a guarded creation leaves the caller's session alone.
pub async fn add_admin(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
    body: Result<AppJson<AddAdminRequest>, ApiError>,
) -> Result<AuthReply, ApiError> {
    // Admission is decided before the body is looked at
    let admission = state
        .bootstrap
        .admit(&RequestCredentials::new(&headers, &jar))
        .await?;
    let AppJson(req) = body?;

    let session = state.user_service.add_admin(&admission, req).await?;
    let jar = match admission {
        AdminAdmission::Bootstrap => with_token_cookie(&state, jar, &session),
        AdminAdmission::Guarded(_) => jar,
    };
    Ok(auth_reply(StatusCode::CREATED, jar, "Admin created successfully", session))
}

/// POST /user/doctor/addnew
pub async fn add_doctor(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ApiResponse<DoctorPayload>>, ApiError> {
    require_admin(&auth)?;

    let multipart =
        multipart.map_err(|_| AppError::validation("Doctor Avatar Required!"))?;
    let (req, avatar) = read_doctor_form(multipart).await?;

    let doctor = state
        .doctor_service
        .add_doctor(auth.user(), req, avatar)
        .await?;

    Ok(Json(ApiResponse::ok(DoctorPayload {
        message: Some("New Doctor Registered".to_string()),
        doctor: UserResponse::from(&doctor),
    })))
}

async fn read_doctor_form(
    mut multipart: Multipart,
) -> Result<(AddDoctorRequest, Option<AvatarUpload>), AppError> {
    let mut req = AddDoctorRequest::default();
    let mut avatar = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(form_error)?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == AVATAR_FIELD {
            let mime_type = field.content_type().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(form_error)?;
            avatar = Some(AvatarUpload { data, mime_type });
            continue;
        }

        let slot = match name.as_str() {
            "firstName" => &mut req.first_name,
            "lastName" => &mut req.last_name,
            "email" => &mut req.email,
            "phone" => &mut req.phone,
            "did" => &mut req.did,
            "dob" => &mut req.dob,
            "gender" => &mut req.gender,
            "password" => &mut req.password,
            "doctorDepartment" => &mut req.doctor_department,
            _ => continue,
        };
        let value = field
            .text()
            .await
            .map_err(form_error)?;
        *slot = Some(value);
    }

    Ok((req, avatar))
}

/// DELETE /user/admin/doctor/{id}
pub async fn delete_doctor(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessagePayload>>, ApiError> {
    require_admin(&auth)?;
    let id = parse_uuid(&id)?;

    state.doctor_service.delete_doctor(id).await?;

    Ok(Json(ApiResponse::ok(MessagePayload::new(
        "Doctor Deleted Successfully!",
    ))))
}

/// GET /user/doctors
pub async fn list_doctors(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DoctorsPayload>>, ApiError> {
    let doctors = state.user_service.list_doctors().await?;

    Ok(Json(ApiResponse::ok(DoctorsPayload {
        doctors: doctors.iter().map(UserResponse::from).collect(),
    })))
}

/// GET /user/admin/me
pub async fn admin_profile(auth: AuthUser) -> Result<Json<ApiResponse<UserPayload>>, ApiError> {
    require_admin(&auth)?;
    Ok(Json(ApiResponse::ok(UserPayload {
        user: UserResponse::from(auth.user()),
    })))
}

/// GET /user/patient/me
pub async fn patient_profile(auth: AuthUser) -> Result<Json<ApiResponse<UserPayload>>, ApiError> {
    require_patient(&auth)?;
    Ok(Json(ApiResponse::ok(UserPayload {
        user: UserResponse::from(auth.user()),
    })))
}

/// GET /user/doctor/me
pub async fn doctor_profile(auth: AuthUser) -> Result<Json<ApiResponse<DoctorPayload>>, ApiError> {
    require_doctor(&auth)?;
    Ok(Json(ApiResponse::ok(DoctorPayload {
        message: None,
        doctor: UserResponse::from(auth.user()),
    })))
}

/// GET /user/admin/logout
pub async fn logout_admin(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
) -> Result<LogoutReply, ApiError> {
    require_admin(&auth)?;
    Ok(logout_reply(&state, jar, UserRole::Admin, "Admin Logged Out Successfully."))
}

/// GET /user/patient/logout
pub async fn logout_patient(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
) -> Result<LogoutReply, ApiError> {
    require_patient(&auth)?;
    Ok(logout_reply(&state, jar, UserRole::Patient, "User Logged Out Successfully."))
}

/// GET /user/doctor/logout
pub async fn logout_doctor(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
) -> Result<LogoutReply, ApiError> {
    require_doctor(&auth)?;
    Ok(logout_reply(&state, jar, UserRole::Doctor, "Doctor Logged Out Successfully."))
}
