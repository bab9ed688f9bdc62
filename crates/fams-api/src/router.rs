//! Route definitions for the FAMS HTTP API.
//!
//! JSON endpoints live under `/api`; the role dashboards and the sign-in
//! landing sit at the top level. The route guard wraps everything,
//! including the fallback, so unknown paths under a protected prefix are
//! still guarded.

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Slack on top of the upload ceiling so oversize files reach validation.
const UPLOAD_BODY_OVERHEAD: usize = 1024 * 1024;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(asset_routes())
        .merge(upload_routes(&state))
        .merge(request_routes())
        .merge(transfer_routes())
        .merge(notification_routes());

    let uploads = &state.config.uploads;
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes(&state))
        .merge(health_routes())
        .nest_service(&uploads.public_prefix, ServeDir::new(&uploads.directory))
        .fallback(handlers::pages::not_found)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::guard::route_guard,
        ))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(cors)
        .with_state(state)
}

/// Login, logout, and session lookup
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/session", get(handlers::auth::session))
}

/// Profile and user administration
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(handlers::users::me))
        .route(
            "/users",
            get(handlers::users::list_users).post(handlers::users::create_user),
        )
        .route("/users/{id}", delete(handlers::users::delete_user))
}

/// Asset registry
fn asset_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/assets",
            get(handlers::assets::list_assets).post(handlers::assets::register_asset),
        )
        .route("/assets/summary", get(handlers::assets::asset_summary))
        .route("/assets/tag/{tag}", get(handlers::assets::get_asset_by_tag))
        .route(
            "/assets/{id}",
            get(handlers::assets::get_asset)
                .put(handlers::assets::update_asset)
                .delete(handlers::assets::delete_asset),
        )
}

/// Asset image/document upload
fn upload_routes(state: &AppState) -> Router<AppState> {
    let limit = usize::try_from(state.config.uploads.max_file_size_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(UPLOAD_BODY_OVERHEAD);

    Router::new().route(
        "/uploads",
        post(handlers::uploads::upload_file).layer(DefaultBodyLimit::max(limit)),
    )
}

/// Asset requests
fn request_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/requests",
            get(handlers::requests::list_requests).post(handlers::requests::submit_request),
        )
        .route("/requests/{id}", get(handlers::requests::get_request))
        .route("/requests/{id}/approve", put(handlers::requests::approve_request))
        .route("/requests/{id}/reject", put(handlers::requests::reject_request))
}

/// Asset transfers
fn transfer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/transfers",
            get(handlers::transfers::list_transfers).post(handlers::transfers::initiate_transfer),
        )
        .route("/transfers/{id}/approve", put(handlers::transfers::approve_transfer))
        .route("/transfers/{id}/reject", put(handlers::transfers::reject_transfer))
}

/// In-app notifications
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route("/notifications", get(handlers::notifications::list_notifications))
        .route(
            "/notifications/unread-count",
            get(handlers::notifications::unread_count),
        )
        .route("/notifications/read-all", put(handlers::notifications::mark_all_read))
        .route("/notifications/{id}/read", put(handlers::notifications::mark_read))
        .route(
            "/notifications/broadcast",
            post(handlers::notifications::broadcast),
        )
}

/// Role dashboards and the sign-in landing, at their configured paths
fn page_routes(state: &AppState) -> Router<AppState> {
    let routes = &state.config.routes;
    Router::new()
        .route(&routes.dashboard_path, get(handlers::pages::dashboard))
        .route("/admin", get(handlers::pages::admin_home))
        .route("/officer", get(handlers::pages::officer_home))
        .route("/lecturer", get(handlers::pages::lecturer_home))
        .route("/course-rep", get(handlers::pages::course_rep_home))
        .route(&routes.sign_in_path, get(handlers::pages::sign_in))
}

/// Liveness and readiness
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/ready", get(handlers::health::ready))
}
