//! PostgreSQL pool construction.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use medcare_core::config::DatabaseConfig;
use medcare_core::error::{AppError, ErrorKind};
use medcare_core::result::AppResult;

/// Open a pool sized and timed by `config`.
pub async fn connect_pool(config: &DatabaseConfig) -> AppResult<PgPool> {
    info!(
        url = %mask_password(&config.url),
        max_connections = config.max_connections,
        "Connecting to PostgreSQL"
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
        .connect(&config.url)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to connect to database: {e}"),
                e,
            )
        })?;

    info!("Connected to PostgreSQL");
    Ok(pool)
}

/// Replace the password in a connection URL with `****`.
fn mask_password(url: &str) -> String {
    let Some(at) = url.rfind('@') else {
        return url.to_string();
    };
    let credentials_start = url.find("://").map_or(0, |p| p + 3);
    match url[credentials_start..at].find(':') {
        Some(rel) => {
            let colon = credentials_start + rel;
            format!("{}:****{}", &url[..colon], &url[at..])
        }
        None => url.to_string(),
    }
}
