//! MedCare Server: hospital backend for patients, doctors and admins.
//!
//! Main entry point that loads configuration, sets up logging and starts
//! the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use medcare_core::config::{AppConfig, LogFormat};
use medcare_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    tracing::info!("Starting MedCare v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = medcare_api::run_server(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load `MEDCARE_CONFIG` when set, otherwise `config/default.toml` with the
/// `MEDCARE_ENV` overlay. `MEDCARE__*` variables override either.
fn load_configuration() -> Result<AppConfig, AppError> {
    if let Ok(path) = std::env::var("MEDCARE_CONFIG") {
        return AppConfig::load_file(&path);
    }

    let env = std::env::var("MEDCARE_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let builder = fmt().with_env_filter(filter).with_target(true);

    match config.logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
    }
}
