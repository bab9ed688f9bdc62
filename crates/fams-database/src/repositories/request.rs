//! Asset request repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use fams_core::error::{AppError, ErrorKind};
use fams_core::result::AppResult;
use fams_core::types::pagination::{PageRequest, PageResponse};
use fams_entity::asset::AssetStatus;
use fams_entity::request::{AssetRequest, CreateAssetRequest, RequestStatus};

/// Repository for asset requests.
#[derive(Debug, Clone)]
pub struct RequestRepository {
    pool: PgPool,
}

impl RequestRepository {
    /// Create a new request repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a request by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AssetRequest>> {
        sqlx::query_as::<_, AssetRequest>("SELECT * FROM asset_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find request", e))
    }

    /// List requests, optionally restricted to one requester and/or status.
    pub async fn find_all(
        &self,
        requester_id: Option<Uuid>,
        status: Option<RequestStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AssetRequest>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM asset_requests \
             WHERE ($1::uuid IS NULL OR requester_id = $1) \
             AND ($2::request_status IS NULL OR status = $2)",
        )
        .bind(requester_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count requests", e))?;

        let items = sqlx::query_as::<_, AssetRequest>(
            "SELECT * FROM asset_requests \
             WHERE ($1::uuid IS NULL OR requester_id = $1) \
             AND ($2::request_status IS NULL OR status = $2) \
             ORDER BY created_at DESC LIMIT $3 OFFSET $4",
        )
        .bind(requester_id)
        .bind(status)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list requests", e))?;

        Ok(PageResponse::new(
            items,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a pending request.
    pub async fn create(&self, data: &CreateAssetRequest) -> AppResult<AssetRequest> {
        sqlx::query_as::<_, AssetRequest>(
            "INSERT INTO asset_requests (id, requester_id, asset_id, title, reason, quantity) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(data.requester_id)
        .bind(data.asset_id)
        .bind(&data.title)
        .bind(&data.reason)
        .bind(data.quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create request", e))
    }

    /// Move a pending request to `Approved` or `Rejected`.
    ///
    /// Approving a request that names an available asset allocates that asset
    /// to the requester in the same transaction. Returns `None` if the request
    /// is no longer pending (or does not exist).
    pub async fn review(
        &self,
        id: Uuid,
        decision: RequestStatus,
        reviewer_id: Uuid,
        note: Option<&str>,
    ) -> AppResult<Option<AssetRequest>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let reviewed = sqlx::query_as::<_, AssetRequest>(
            "UPDATE asset_requests SET status = $2, reviewed_by = $3, review_note = $4, \
             reviewed_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND status = 'PENDING' RETURNING *",
        )
        .bind(id)
        .bind(decision)
        .bind(reviewer_id)
        .bind(note)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to review request", e))?;

        let Some(reviewed) = reviewed else {
            return Ok(None);
        };

        if decision == RequestStatus::Approved {
            if let Some(asset_id) = reviewed.asset_id {
                let allocated = sqlx::query(
                    "UPDATE assets SET status = $2, custodian_id = $3, updated_at = NOW() \
                     WHERE id = $1 AND status = 'AVAILABLE'",
                )
                .bind(asset_id)
                .bind(AssetStatus::InUse)
                .bind(reviewed.requester_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to allocate asset", e)
                })?;

                if allocated.rows_affected() == 0 {
                    return Err(AppError::conflict(
                        "The requested asset is no longer available",
                    ));
                }
            }
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit review", e)
        })?;

        Ok(Some(reviewed))
    }
}
