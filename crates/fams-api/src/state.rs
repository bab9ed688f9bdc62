//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use fams_auth::guard::RoutePolicy;
use fams_auth::jwt::JwtEncoder;
use fams_auth::session::SessionResolver;
use fams_core::config::AppConfig;
use fams_service::asset::{AssetService, UploadService};
use fams_service::auth::AuthService;
use fams_service::notification::NotificationService;
use fams_service::request::RequestService;
use fams_service::transfer::TransferService;
use fams_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// Session token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// Turns a presented token into a session
    pub session_resolver: Arc<dyn SessionResolver>,
    /// Protected prefixes and their roles
    pub route_policy: Arc<RoutePolicy>,

    // ── Services ─────────────────────────────────────────────
    /// Login
    pub auth_service: Arc<AuthService>,
    /// User profile and administration
    pub user_service: Arc<UserService>,
    /// Asset registry
    pub asset_service: Arc<AssetService>,
    /// Asset uploads
    pub upload_service: Arc<UploadService>,
    /// Asset requests
    pub request_service: Arc<RequestService>,
    /// Asset transfers
    pub transfer_service: Arc<TransferService>,
    /// Notifications
    pub notification_service: Arc<NotificationService>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("environment", &self.config.environment)
            .field("route_policy", &self.route_policy)
            .finish_non_exhaustive()
    }
}
