//! CLI command definitions and dispatch.

pub mod config;
pub mod migrate;
pub mod permissions;
pub mod user;

use clap::{Parser, Subcommand};
use sqlx::PgPool;

use crate::output::OutputFormat;
use fams_core::config::AppConfig;
use fams_core::error::AppError;
use fams_database::DatabasePool;

/// FAMS: Faculty Asset Management System
#[derive(Debug, Parser)]
#[command(name = "fams", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding default.toml and the environment overlays
    #[arg(long, default_value = "config")]
    pub config_dir: String,

    /// Environment overlay to load (development, test, production)
    #[arg(short, long, default_value = "development")]
    pub env: String,

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
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// User management
    User(user::UserArgs),
    /// Show the role/permission table
    Permissions(permissions::PermissionsArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, self).await,
            Commands::User(args) => user::execute(args, self).await,
            Commands::Permissions(args) => permissions::execute(args, self.format),
            Commands::Config(args) => config::execute(args, self),
        }
    }

    /// Load configuration for the selected environment.
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        AppConfig::load_from(&self.config_dir, &self.env)
    }
}

/// Helper: create database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<PgPool, AppError> {
    let pool = DatabasePool::connect(&config.database).await?;
    Ok(pool.into_pool())
}
