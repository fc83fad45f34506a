//! Application builder: wires router, middleware and state into an Axum
//! app, and runs it.

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_middleware;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use medcare_core::config::AppConfig;
use medcare_core::error::AppError;
use medcare_core::traits::avatar::AvatarStorage;
use medcare_database::Stores;
use medcare_storage::build_avatar_storage;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(request_logging))
}

/// Connect the configured stores and avatar storage, then serve until
/// Ctrl+C.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting MedCare server...");

    // ── Step 1: Stores ───────────────────────────────────────────
    tracing::info!(backend = ?config.database.backend, "Initializing stores...");
    let stores = Stores::connect(&config.database).await?;

    // ── Step 2: Avatar storage ───────────────────────────────────
    tracing::info!(
        "Initializing avatar storage (provider: {})...",
        config.storage.provider
    );
    let avatars: Arc<dyn AvatarStorage> = build_avatar_storage(&config.storage).await?;

    // ── Step 3: Build and start HTTP server ──────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = build_app(AppState::new(config, stores, avatars));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("MedCare server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("MedCare server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
