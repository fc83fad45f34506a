//! Database migration management commands.

use clap::{Args, Subcommand};

use medcare_core::config::{AppConfig, DatabaseBackend};
use medcare_core::error::AppError;
use medcare_database::{connect_pool, migration};

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> Result<(), AppError> {
    if config.database.backend != DatabaseBackend::Postgres {
        output::print_warning("The in-memory backend has no migrations.");
        return Ok(());
    }

    match &args.command {
        MigrateCommand::Run => {
            let pool = connect_pool(&config.database).await?;
            println!("Running database migrations...");
            migration::run_migrations(&pool).await?;
            output::print_success("All migrations applied successfully.");
        }
    }

    Ok(())
}
