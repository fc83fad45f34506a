//! CLI command definitions and dispatch.

pub mod admin;
pub mod config;
pub mod migrate;
pub mod serve;
pub mod user;

use clap::{Parser, Subcommand};

use medcare_core::config::AppConfig;
use medcare_core::error::AppError;

use crate::output::OutputFormat;

/// MedCare hospital backend administration
#[derive(Debug, Parser)]
#[command(name = "medcare", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file; defaults to `config/default.toml` plus the
    /// `MEDCARE_ENV` overlay
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the MedCare server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Admin account maintenance
    Admin(admin::AdminArgs),
    /// Inspect users
    User(user::UserArgs),
    /// Inspect the resolved configuration
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = load_config(self.config.as_deref())?;
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Admin(args) => admin::execute(args, &config).await,
            Commands::User(args) => user::execute(args, &config, self.format).await,
            Commands::Config(args) => config::execute(args, &config, self.format),
        }
    }
}

/// Load configuration from an explicit file or the environment overlay.
pub fn load_config(path: Option<&str>) -> Result<AppConfig, AppError> {
    match path {
        Some(path) => AppConfig::load_file(path),
        None => {
            let env = std::env::var("MEDCARE_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
}
