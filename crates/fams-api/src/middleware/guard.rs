//! Route guard: resolves the session and enforces the prefix policy.
//!
//! Browser paths get `303 See Other` redirects. Paths under `/api` get a
//! JSON `401` (no session) or `403` (role mismatch) instead, since API
//! clients cannot follow a redirect to an HTML sign-in page.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::{debug, info};

use fams_auth::guard::{GuardAction, path_has_prefix};
use fams_core::error::AppError;

use crate::error::ApiError;
use crate::extractors::token::session_token;
use crate::state::AppState;

const API_PREFIX: &str = "/api";

/// Guard middleware applied to the whole router.
pub async fn route_guard(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    let policy = &state.route_policy;

    if !policy.is_guarded(&path) {
        return next.run(request).await;
    }

    let session = match session_token(request.headers(), &state.config.auth.cookie_name) {
        Some(token) => state.session_resolver.resolve(&token).await,
        None => None,
    };

    let action = policy.evaluate(&path, session.as_ref());

    match action {
        GuardAction::PassThrough => {
            debug!(path = %path, user_id = ?session.as_ref().map(|s| s.user_id), "Guard passed");
            if let Some(session) = session {
                request.extensions_mut().insert(session);
            }
            next.run(request).await
        }
        GuardAction::RedirectToSignIn | GuardAction::RedirectToDashboard => {
            info!(
                path = %path,
                action = ?action,
                role = ?session.as_ref().map(|s| s.role),
                "Guard denied request"
            );
            deny(&state, &path, action)
        }
    }
}

fn deny(state: &AppState, path: &str, action: GuardAction) -> Response {
    if path_has_prefix(path, API_PREFIX) {
        let err = match action {
            GuardAction::RedirectToSignIn => AppError::authentication("Authentication required"),
            _ => AppError::authorization("Your role does not have access to this resource"),
        };
        return ApiError::from(err).into_response();
    }

    match state.route_policy.redirect_target(action) {
        Some(target) => Redirect::to(target).into_response(),
        None => ApiError::from(AppError::internal("Guard produced no redirect target"))
            .into_response(),
    }
}
