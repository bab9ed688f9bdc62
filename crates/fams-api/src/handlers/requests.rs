//! Asset request handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use fams_core::types::pagination::PageResponse;
use fams_entity::request::AssetRequest;
use fams_service::request::ReviewDecision;

use crate::dto::request::{RequestListQuery, ReviewBody, SubmitRequestBody};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams, ValidatedJson};
use crate::state::AppState;

/// POST /api/requests
pub async fn submit_request(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(body): ValidatedJson<SubmitRequestBody>,
) -> Result<(StatusCode, Json<ApiResponse<AssetRequest>>), ApiError> {
    let request = state.request_service.submit(&auth, body.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(request))))
}

/// GET /api/requests
pub async fn list_requests(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(page): Query<PaginationParams>,
    Query(query): Query<RequestListQuery>,
) -> Result<Json<ApiResponse<PageResponse<AssetRequest>>>, ApiError> {
    let requests = state
        .request_service
        .list(&auth, query.status, page.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(requests)))
}

/// GET /api/requests/{id}
pub async fn get_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AssetRequest>>, ApiError> {
    let request = state.request_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok(request)))
}

/// PUT /api/requests/{id}/approve
pub async fn approve_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    body: Option<ValidatedJson<ReviewBody>>,
) -> Result<Json<ApiResponse<AssetRequest>>, ApiError> {
    review(state, auth, id, ReviewDecision::Approve, body).await
}

/// PUT /api/requests/{id}/reject
pub async fn reject_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    body: Option<ValidatedJson<ReviewBody>>,
) -> Result<Json<ApiResponse<AssetRequest>>, ApiError> {
    review(state, auth, id, ReviewDecision::Reject, body).await
}

async fn review(
    state: AppState,
    auth: AuthUser,
    id: Uuid,
    decision: ReviewDecision,
    body: Option<ValidatedJson<ReviewBody>>,
) -> Result<Json<ApiResponse<AssetRequest>>, ApiError> {
    let note = body.and_then(|ValidatedJson(b)| b.note);
    let request = state
        .request_service
        .review(&auth, id, decision, note)
        .await?;
    Ok(Json(ApiResponse::ok(request)))
}
