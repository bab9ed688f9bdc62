//! Asset transfer repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use fams_core::error::{AppError, ErrorKind};
use fams_core::result::AppResult;
use fams_core::types::pagination::{PageRequest, PageResponse};
use fams_entity::transfer::{AssetTransfer, CreateTransfer, TransferStatus};

use super::map_write_error;

/// Repository for asset transfers.
#[derive(Debug, Clone)]
pub struct TransferRepository {
    pool: PgPool,
}

impl TransferRepository {
    /// Create a new transfer repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a transfer by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AssetTransfer>> {
        sqlx::query_as::<_, AssetTransfer>("SELECT * FROM asset_transfers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find transfer", e))
    }

    /// List transfers, optionally for one asset and/or status.
    pub async fn find_all(
        &self,
        asset_id: Option<Uuid>,
        status: Option<TransferStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AssetTransfer>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM asset_transfers \
             WHERE ($1::uuid IS NULL OR asset_id = $1) \
             AND ($2::transfer_status IS NULL OR status = $2)",
        )
        .bind(asset_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count transfers", e))?;

        let items = sqlx::query_as::<_, AssetTransfer>(
            "SELECT * FROM asset_transfers \
             WHERE ($1::uuid IS NULL OR asset_id = $1) \
             AND ($2::transfer_status IS NULL OR status = $2) \
             ORDER BY created_at DESC LIMIT $3 OFFSET $4",
        )
        .bind(asset_id)
        .bind(status)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list transfers", e))?;

        Ok(PageResponse::new(
            items,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a pending transfer. At most one pending transfer may exist per asset.
    pub async fn create(&self, data: &CreateTransfer) -> AppResult<AssetTransfer> {
        sqlx::query_as::<_, AssetTransfer>(
            "INSERT INTO asset_transfers (id, asset_id, from_department, to_department, \
             from_custodian_id, to_custodian_id, reason, initiated_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(Uuid::now_v7())
        .bind(data.asset_id)
        .bind(&data.from_department)
        .bind(&data.to_department)
        .bind(data.from_custodian_id)
        .bind(data.to_custodian_id)
        .bind(&data.reason)
        .bind(data.initiated_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(
                e,
                "A transfer for this asset is already pending",
                "Failed to create transfer",
            )
        })
    }

    /// Complete a pending transfer and apply it to the asset atomically.
    ///
    /// Returns `None` if the transfer is no longer pending.
    pub async fn complete(&self, id: Uuid, reviewer_id: Uuid) -> AppResult<Option<AssetTransfer>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let completed = sqlx::query_as::<_, AssetTransfer>(
            "UPDATE asset_transfers SET status = 'COMPLETED', reviewed_by = $2, \
             reviewed_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND status = 'PENDING' RETURNING *",
        )
        .bind(id)
        .bind(reviewer_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to complete transfer", e))?;

        let Some(completed) = completed else {
            return Ok(None);
        };

        let moved = sqlx::query(
            "UPDATE assets SET department = $2, \
             custodian_id = $3, \
             status = CASE \
                 WHEN $3::uuid IS NOT NULL THEN 'IN_USE'::asset_status \
                 WHEN status = 'IN_USE' THEN 'AVAILABLE'::asset_status \
                 ELSE status END, \
             updated_at = NOW() \
             WHERE id = $1 AND status <> 'DISPOSED'",
        )
        .bind(completed.asset_id)
        .bind(&completed.to_department)
        .bind(completed.to_custodian_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to move asset", e))?;

        if moved.rows_affected() == 0 {
            return Err(AppError::conflict(
                "The asset was disposed or removed before the transfer was approved",
            ));
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transfer", e)
        })?;

        Ok(Some(completed))
    }

    /// Reject a pending transfer. Returns `None` if it is no longer pending.
    pub async fn reject(&self, id: Uuid, reviewer_id: Uuid) -> AppResult<Option<AssetTransfer>> {
        sqlx::query_as::<_, AssetTransfer>(
            "UPDATE asset_transfers SET status = 'REJECTED', reviewed_by = $2, \
             reviewed_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND status = 'PENDING' RETURNING *",
        )
        .bind(id)
        .bind(reviewer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to reject transfer", e))
    }
}
