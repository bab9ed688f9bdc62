//! Session extractors for handlers.
//!
//! The route guard stores the resolved [`Session`] in request extensions;
//! these extractors reuse it and only resolve the token themselves on paths
//! the guard does not cover.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use fams_auth::session::Session;
use fams_core::error::AppError;
use fams_service::context::RequestContext;

use super::token::session_token;
use crate::error::ApiError;
use crate::state::AppState;

async fn resolve_session(parts: &Parts, state: &AppState) -> Option<Session> {
    if let Some(session) = parts.extensions.get::<Session>() {
        return Some(session.clone());
    }
    let token = session_token(&parts.headers, &state.config.auth.cookie_name)?;
    state.session_resolver.resolve(&token).await
}

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve_session(parts, state)
            .await
            .map(|session| AuthUser(RequestContext::from(session)))
            .ok_or_else(|| AppError::authentication("Authentication required").into())
    }
}

/// The session if there is one; never rejects.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Option<Session>);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(CurrentSession(resolve_session(parts, state).await))
    }
}
