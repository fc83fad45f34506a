//! Embedded schema migrations for the users, appointments and messages tables.

use sqlx::PgPool;
use sqlx::migrate::Migrator;

use medcare_core::error::{AppError, ErrorKind};
use medcare_core::result::AppResult;

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Apply every migration in `migrations/` that the database has not seen yet.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    let known = MIGRATOR.iter().count();
    tracing::info!(migrations = known, "Applying schema migrations");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, format!("Schema migration failed: {e}"), e)
    })?;

    tracing::info!("Schema is up to date");
    Ok(())
}
