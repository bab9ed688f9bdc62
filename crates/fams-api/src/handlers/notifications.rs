//! Notification handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Serialize;
use uuid::Uuid;

use fams_core::types::pagination::PageResponse;
use fams_entity::notification::Notification;

use crate::dto::request::{BroadcastBody, NotificationListQuery};
use crate::dto::response::{ApiResponse, CountResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams, ValidatedJson};
use crate::state::AppState;

/// Number of users a broadcast reached.
#[derive(Debug, Serialize)]
pub struct BroadcastResponse {
    /// Recipients.
    pub recipients: usize,
}

/// GET /api/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(page): Query<PaginationParams>,
    Query(query): Query<NotificationListQuery>,
) -> Result<Json<ApiResponse<PageResponse<Notification>>>, ApiError> {
    let notifications = state
        .notification_service
        .list(&auth, query.unread_only, page.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(notifications)))
}

/// GET /api/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let count = state.notification_service.unread_count(&auth).await?;
    Ok(Json(ApiResponse::ok(CountResponse { count })))
}

/// PUT /api/notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.notification_service.mark_read(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Marked as read"))))
}

/// PUT /api/notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<CountResponse>>, ApiError> {
    let count = state.notification_service.mark_all_read(&auth).await?;
    Ok(Json(ApiResponse::ok(CountResponse {
        count: count as i64,
    })))
}

/// POST /api/notifications/broadcast
pub async fn broadcast(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(body): ValidatedJson<BroadcastBody>,
) -> Result<Json<ApiResponse<BroadcastResponse>>, ApiError> {
    let recipients = state
        .notification_service
        .broadcast(&auth, body.into())
        .await?;
    Ok(Json(ApiResponse::ok(BroadcastResponse { recipients })))
}
