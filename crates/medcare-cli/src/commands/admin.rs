//! Admin account maintenance commands.

use std::sync::Arc;

use clap::{Args, Subcommand};

use medcare_auth::jwt::TokenCodec;
use medcare_auth::password::PasswordHasher;
use medcare_core::config::AppConfig;
use medcare_core::error::AppError;
use medcare_database::Stores;
use medcare_service::UserService;

use crate::output;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Reset the password of any account by email
    ResetPassword {
        /// Email of the account
        #[arg(short, long)]
        email: String,
        /// New password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, config: &AppConfig) -> Result<(), AppError> {
    match &args.command {
        AdminCommand::ResetPassword { email, password } => {
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("New password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let stores = Stores::connect(&config.database).await?;
            let service = UserService::new(
                stores.users,
                Arc::new(PasswordHasher::new()),
                Arc::new(TokenCodec::new(&config.auth)),
                config.auth.password_min_length,
            );

            let user = service.reset_password(email, &password).await?;
            output::print_success(&format!(
                "Password reset for {} ({}, id: {})",
                user.email, user.role, user.id
            ));
        }
    }

    Ok(())
}
