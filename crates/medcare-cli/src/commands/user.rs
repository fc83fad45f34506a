//! User inspection commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use medcare_core::config::AppConfig;
use medcare_core::error::AppError;
use medcare_database::Stores;
use medcare_entity::user::{User, UserRole};

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List users holding a role
    List {
        /// Role to list: Admin, Doctor or Patient
        #[arg(short, long, value_parser = parse_role)]
        role: UserRole,
    },
}

fn parse_role(s: &str) -> Result<UserRole, String> {
    s.parse().map_err(|e: AppError| e.message)
}

/// One row of `user list`.
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    phone: String,
    role: String,
    department: String,
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.to_string(),
            name: u.full_name(),
            email: u.email.clone(),
            phone: u.phone.clone(),
            role: u.role.to_string(),
            department: u.doctor_department.clone().unwrap_or_default(),
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let stores = Stores::connect(&config.database).await?;

    match &args.command {
        UserCommand::List { role } => {
            let users = stores.users.list_by_role(*role).await?;
            let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
