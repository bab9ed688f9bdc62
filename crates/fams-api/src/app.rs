//! Application builder: wires repositories, services, and the router.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use fams_auth::guard::RoutePolicy;
use fams_auth::jwt::{JwtDecoder, JwtEncoder};
use fams_auth::password::{PasswordHasher, PasswordValidator};
use fams_auth::session::JwtSessionResolver;
use fams_core::config::AppConfig;
use fams_core::error::AppError;
use fams_database::repositories::{
    AssetRepository, NotificationRepository, RequestRepository, TransferRepository,
    UserRepository,
};
use fams_service::asset::{AssetService, UploadService};
use fams_service::auth::AuthService;
use fams_service::notification::NotificationService;
use fams_service::request::RequestService;
use fams_service::transfer::TransferService;
use fams_service::user::UserService;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Constructs every repository and service over the given pool.
///
/// Performs no I/O; the pool may be lazily connected.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let asset_repo = Arc::new(AssetRepository::new(db_pool.clone()));
    let request_repo = Arc::new(RequestRepository::new(db_pool.clone()));
    let transfer_repo = Arc::new(TransferRepository::new(db_pool.clone()));
    let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));

    // ── Auth ─────────────────────────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let session_resolver = Arc::new(JwtSessionResolver::new(JwtDecoder::new(&config.auth)));
    let route_policy = Arc::new(RoutePolicy::standard(&config.routes));

    // ── Services ─────────────────────────────────────────────────
    let notification_service = Arc::new(NotificationService::new(
        Arc::clone(&notification_repo),
        Arc::clone(&user_repo),
    ));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
    ));
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        password_hasher,
        password_validator,
    ));
    let asset_service = Arc::new(AssetService::new(Arc::clone(&asset_repo)));
    let upload_service = Arc::new(UploadService::new(config.uploads.clone()));
    let request_service = Arc::new(RequestService::new(
        request_repo,
        Arc::clone(&asset_repo),
        Arc::clone(&notification_service),
    ));
    let transfer_service = Arc::new(TransferService::new(
        transfer_repo,
        asset_repo,
        user_repo,
        Arc::clone(&notification_service),
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        jwt_encoder,
        session_resolver,
        route_policy,
        auth_service,
        user_service,
        asset_service,
        upload_service,
        request_service,
        transfer_service,
        notification_service,
    }
}

/// Runs the FAMS server until Ctrl+C / SIGTERM.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    tokio::fs::create_dir_all(&config.uploads.directory)
        .await
        .map_err(|e| {
            AppError::storage(format!(
                "Failed to create upload directory '{}': {e}",
                config.uploads.directory
            ))
        })?;

    let addr = config.server.bind_address();
    let state = build_state(config, db_pool);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("FAMS server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("FAMS server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
