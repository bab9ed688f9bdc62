//! Asset image/document upload.

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;

use fams_core::error::AppError;
use fams_service::asset::{StoredUpload, UploadParams};

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

const FILE_FIELD: &str = "file";

/// POST /api/uploads (multipart, field `file`)
pub async fn upload_file(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<StoredUpload>>), ApiError> {
    let mut params: Option<UploadParams> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed upload: {}", e.body_text())))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.map_err(|e| {
            AppError::validation(format!("Failed to read upload: {}", e.body_text()))
        })?;

        params = Some(UploadParams {
            file_name,
            content_type,
            data,
        });
        break;
    }

    let params = params.ok_or_else(|| AppError::validation("No file provided"))?;
    let stored = state.upload_service.store(&auth, params).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(stored))))
}
