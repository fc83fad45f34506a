//! Contact message handlers.

use axum::Json;
use axum::extract::{Path, State};

use medcare_entity::user::UserRole;
use medcare_service::message::SendMessageRequest;

use crate::dto::response::{ApiResponse, MessagePayload, MessageResponse, MessagesPayload};
use crate::error::ApiError;
use crate::extractors::{AppJson, AuthUser, parse_uuid};
use crate::middleware::rbac::{require_admin, require_roles};
use crate::state::AppState;

/// POST /message/send
pub async fn send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(req): AppJson<SendMessageRequest>,
) -> Result<Json<ApiResponse<MessagePayload>>, ApiError> {
    require_roles(&auth, &UserRole::ALL)?;

    state.message_service.send(req).await?;

    Ok(Json(ApiResponse::ok(MessagePayload::new("Message Sent!"))))
}

/// GET /message/getall
pub async fn list_messages(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<MessagesPayload>>, ApiError> {
    require_admin(&auth)?;

    let messages = state.message_service.list_all().await?;
    Ok(Json(ApiResponse::ok(MessagesPayload {
        messages: messages.iter().map(MessageResponse::from).collect(),
    })))
}

/// DELETE /message/delete/{id}
pub async fn delete_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessagePayload>>, ApiError> {
    require_admin(&auth)?;
    let id = parse_uuid(&id)?;

    state.message_service.delete(id).await?;

    Ok(Json(ApiResponse::ok(MessagePayload::new(
        "Message Deleted Successfully!",
    ))))
}
