//! Auth handlers: login, logout, session.
//!
//! These live under the auth prefix and are never blocked by the guard.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, SessionResponse};
use crate::error::ApiError;
use crate::extractors::{CurrentSession, ValidatedJson};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), ApiError> {
    let result = state.auth_service.login(&req.email, &req.password).await?;

    let cookie = Cookie::build((state.config.auth.cookie_name.clone(), result.token.clone()))
        .path("/")
        .http_only(true)
        .secure(state.config.auth.cookie_secure)
        .same_site(SameSite::Lax);

    let response = LoginResponse {
        token: result.token,
        expires_at: result.expires_at,
        redirect_to: result.user.role.dashboard_path().to_string(),
        user: result.user.into(),
    };

    Ok((jar.add(cookie), Json(ApiResponse::ok(response))))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    // Always send the expiry, even when the request carried no cookie.
    let cookie = Cookie::build((state.config.auth.cookie_name.clone(), ""))
        .path("/")
        .removal();
    (
        jar.add(cookie),
        Json(ApiResponse::ok(MessageResponse::new("Signed out"))),
    )
}

/// GET /api/auth/session
///
/// Returns `data: null` when there is no valid session.
pub async fn session(
    CurrentSession(session): CurrentSession,
) -> Json<ApiResponse<Option<SessionResponse>>> {
    Json(ApiResponse::ok(session.map(SessionResponse::from)))
}
