//! Configuration inspection commands.

use clap::{Args, Subcommand};

use medcare_core::config::AppConfig;
use medcare_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration with secrets masked
    Show,
}

const MASK: &str = "********";

/// Execute config commands
pub fn execute(args: &ConfigArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let mut shown = config.clone();
            shown.auth.jwt_secret = MASK.to_string();
            if let Some(at) = shown.database.url.rfind('@') {
                let start = shown.database.url.find("://").map_or(0, |p| p + 3);
                let url = &shown.database.url;
                shown.database.url = format!("{}{MASK}{}", &url[..start], &url[at..]);
            }

            match format {
                OutputFormat::Json => output::print_json(&shown),
                OutputFormat::Table => {
                    println!("Server:");
                    output::print_kv("Bind", &format!("{}:{}", shown.server.host, shown.server.port));
                    output::print_kv("API prefix", &shown.server.api_prefix);
                    output::print_kv("CORS origins", &shown.server.cors.allowed_origins.join(", "));
                    println!("Database:");
                    output::print_kv("Backend", &format!("{:?}", shown.database.backend));
                    output::print_kv("URL", &shown.database.url);
                    println!("Auth:");
                    output::print_kv("JWT secret", &shown.auth.jwt_secret);
                    output::print_kv("Token TTL (hours)", &shown.auth.token_ttl_hours.to_string());
                    output::print_kv("Cookie TTL (days)", &shown.auth.cookie_ttl_days.to_string());
                    output::print_kv("Secure cookies", &shown.auth.cookie_secure.to_string());
                    println!("Storage:");
                    output::print_kv("Provider", &shown.storage.provider);
                    output::print_kv("Avatar dir", &shown.storage.avatar_dir);
                    output::print_kv("Public URL", &shown.storage.public_base_url);
                    println!("Logging:");
                    output::print_kv("Level", &shown.logging.level);
                    output::print_kv("Format", &shown.logging.format.to_string());
                }
            }
        }
    }

    Ok(())
}
