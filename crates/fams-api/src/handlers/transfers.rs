//! Asset transfer handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use fams_core::types::pagination::PageResponse;
use fams_entity::transfer::AssetTransfer;
use fams_service::request::ReviewDecision;

use crate::dto::request::{InitiateTransferBody, TransferListQuery};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams, ValidatedJson};
use crate::state::AppState;

/// POST /api/transfers
pub async fn initiate_transfer(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(body): ValidatedJson<InitiateTransferBody>,
) -> Result<(StatusCode, Json<ApiResponse<AssetTransfer>>), ApiError> {
    let transfer = state.transfer_service.initiate(&auth, body.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(transfer))))
}

/// GET /api/transfers
pub async fn list_transfers(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(page): Query<PaginationParams>,
    Query(query): Query<TransferListQuery>,
) -> Result<Json<ApiResponse<PageResponse<AssetTransfer>>>, ApiError> {
    let transfers = state
        .transfer_service
        .list(&auth, query.asset_id, query.status, page.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(transfers)))
}

/// PUT /api/transfers/{id}/approve
pub async fn approve_transfer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AssetTransfer>>, ApiError> {
    let transfer = state
        .transfer_service
        .review(&auth, id, ReviewDecision::Approve)
        .await?;
    Ok(Json(ApiResponse::ok(transfer)))
}

/// PUT /api/transfers/{id}/reject
pub async fn reject_transfer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AssetTransfer>>, ApiError> {
    let transfer = state
        .transfer_service
        .review(&auth, id, ReviewDecision::Reject)
        .await?;
    Ok(Json(ApiResponse::ok(transfer)))
}
