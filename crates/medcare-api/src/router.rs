//! Route definitions for the MedCare HTTP API.
//!
//! Domain routes are mounted under the configured API prefix; `/health`
//! and the local avatar directory sit at the root.

use axum::Router;
use axum::routing::{delete, get, post, put};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::state::AppState;

/// Path local avatars are served from.
pub const AVATAR_ROUTE: &str = "/avatars";

/// Build the route tree. Middleware is added by [`crate::app::build_app`].
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .nest("/user", user_routes())
        .nest("/appointment", appointment_routes())
        .nest("/message", message_routes());

    let prefix = state.config.server.api_prefix.trim_end_matches('/');
    let mut router = if prefix.is_empty() {
        Router::new().merge(api_routes)
    } else {
        Router::new().nest(prefix, api_routes)
    };

    router = router.route("/health", get(handlers::health::health));

    if state.config.storage.provider == "local" {
        router = router.nest_service(
            AVATAR_ROUTE,
            ServeDir::new(&state.config.storage.avatar_dir),
        );
    }

    router
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Accounts, profiles, doctors and the admin appointment list
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::user::login))
        .route("/patient/register", post(handlers::user::register_patient))
        .route("/patient/me", get(handlers::user::patient_profile))
        .route("/patient/logout", get(handlers::user::logout_patient))
        .route("/admin/addnew", post(handlers::user::add_admin))
        .route("/admin/me", get(handlers::user::admin_profile))
        .route("/admin/logout", get(handlers::user::logout_admin))
        .route("/admin/doctor/{id}", delete(handlers::user::delete_doctor))
        .route("/doctor/addnew", post(handlers::user::add_doctor))
        .route("/doctor/me", get(handlers::user::doctor_profile))
        .route("/doctor/logout", get(handlers::user::logout_doctor))
        .route("/doctors", get(handlers::user::list_doctors))
        .route(
            "/appointment/getall",
            get(handlers::appointment::list_appointments),
        )
}

/// Booking and administration
fn appointment_routes() -> Router<AppState> {
    Router::new()
        .route("/post", post(handlers::appointment::post_appointment))
        .route("/getall", get(handlers::appointment::list_appointments))
        .route("/doctor", get(handlers::appointment::doctor_appointments))
        .route(
            "/update/{id}",
            put(handlers::appointment::update_appointment),
        )
        .route(
            "/delete/{id}",
            delete(handlers::appointment::delete_appointment),
        )
}

/// Contact messages
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/send", post(handlers::message::send_message))
        .route("/getall", get(handlers::message::list_messages))
        .route("/delete/{id}", delete(handlers::message::delete_message))
}
