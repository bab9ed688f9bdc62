//! Asset registry handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use fams_core::types::pagination::PageResponse;
use fams_database::repositories::AssetFilter;
use fams_entity::asset::Asset;
use fams_service::asset::AssetSummary;

use crate::dto::request::{AssetListQuery, RegisterAssetBody, UpdateAssetBody};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams, ValidatedJson};
use crate::state::AppState;

/// GET /api/assets
pub async fn list_assets(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(page): Query<PaginationParams>,
    Query(query): Query<AssetListQuery>,
) -> Result<Json<ApiResponse<PageResponse<Asset>>>, ApiError> {
    let filter = AssetFilter {
        status: query.status,
        department: query.department.filter(|d| !d.trim().is_empty()),
        custodian_id: query.custodian_id,
        search: query.search.filter(|s| !s.trim().is_empty()),
    };
    let assets = state
        .asset_service
        .list(&auth, filter, page.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(assets)))
}

/// GET /api/assets/summary
pub async fn asset_summary(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<AssetSummary>>, ApiError> {
    let summary = state.asset_service.summary(&auth).await?;
    Ok(Json(ApiResponse::ok(summary)))
}

/// GET /api/assets/{id}
pub async fn get_asset(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Asset>>, ApiError> {
    let asset = state.asset_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok(asset)))
}

/// GET /api/assets/tag/{tag}
pub async fn get_asset_by_tag(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(tag): Path<String>,
) -> Result<Json<ApiResponse<Asset>>, ApiError> {
    let asset = state.asset_service.get_by_tag(&auth, &tag).await?;
    Ok(Json(ApiResponse::ok(asset)))
}

/// POST /api/assets
pub async fn register_asset(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(body): ValidatedJson<RegisterAssetBody>,
) -> Result<(StatusCode, Json<ApiResponse<Asset>>), ApiError> {
    let asset = state.asset_service.register(&auth, body.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(asset))))
}

/// PUT /api/assets/{id}
pub async fn update_asset(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<UpdateAssetBody>,
) -> Result<Json<ApiResponse<Asset>>, ApiError> {
    let asset = state.asset_service.update(&auth, id, body.into()).await?;
    Ok(Json(ApiResponse::ok(asset)))
}

/// DELETE /api/assets/{id}
pub async fn delete_asset(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.asset_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Asset deleted"))))
}
