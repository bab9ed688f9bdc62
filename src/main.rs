//! FAMS Server: Faculty Asset Management System
//!
//! Loads configuration, connects to PostgreSQL, applies migrations, and
//! serves the HTTP API until shutdown.

use tracing_subscriber::{EnvFilter, fmt};

use fams_core::config::AppConfig;
use fams_core::error::AppError;
use fams_database::DatabasePool;

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

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load `config/default.toml`, the `FAMS_ENV` overlay, and `FAMS__*` variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_dir = std::env::var("FAMS_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());
    let env = std::env::var("FAMS_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load_from(&config_dir, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        environment = %config.environment,
        "Starting FAMS v{}",
        env!("CARGO_PKG_VERSION")
    );

    let db = DatabasePool::connect(&config.database).await?;
    fams_database::migration::run_migrations(db.pool()).await?;

    let result = fams_api::run_server(config, db.pool().clone()).await;
    db.close().await;
    result
}
