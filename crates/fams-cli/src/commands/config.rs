//! Configuration inspection commands.

use clap::{Args, Subcommand};

use super::Cli;
use crate::output::{self, OutputFormat};
use fams_core::config::AppConfig;
use fams_core::error::AppError;
use fams_database::mask_password;

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
    /// Show the effective configuration (secrets masked)
    Show,
    /// Validate the configuration for the selected environment
    Validate,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, cli: &Cli) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let config = masked(cli.load_config()?);
            match cli.format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&config)
                        .map_err(|e| AppError::internal(format!("Failed to render config: {e}")))?;
                    println!("{json}");
                }
                OutputFormat::Table => print_summary(&config),
            }
        }
        ConfigCommand::Validate => match cli.load_config() {
            Ok(config) => {
                output::print_success(&format!(
                    "Configuration for '{}' is valid",
                    config.environment
                ));
                print_summary(&masked(config));
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }
        },
    }

    Ok(())
}

fn print_summary(config: &AppConfig) {
    output::print_kv("Environment", config.environment.as_str());
    output::print_kv("Server", &config.server.bind_address());
    output::print_kv("Database", &config.database.url);
    output::print_kv("Upload directory", &config.uploads.directory);
    output::print_kv(
        "Upload limit",
        &format!("{} bytes", config.uploads.max_file_size_bytes),
    );
    output::print_kv("Sign-in path", &config.routes.sign_in_path);
    output::print_kv("Dashboard path", &config.routes.dashboard_path);
    output::print_kv("Session cookie", &config.auth.cookie_name);
    output::print_kv("Log level", &config.logging.level);
}

fn masked(mut config: AppConfig) -> AppConfig {
    config.database.url = mask_password(&config.database.url);
    config.auth.jwt_secret = "****".to_string();
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_hides_secret() {
        let config = masked(AppConfig::default());
        assert_eq!(config.auth.jwt_secret, "****");
        assert!(!config.database.url.contains(":fams@"));
    }
}
