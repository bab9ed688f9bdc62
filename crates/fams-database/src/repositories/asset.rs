//! Asset repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use fams_core::error::{AppError, ErrorKind};
use fams_core::result::AppResult;
use fams_core::types::pagination::{PageRequest, PageResponse};
use fams_entity::asset::{Asset, AssetStatus, CreateAsset, UpdateAsset};

use super::map_write_error;

/// Optional filters for asset listings.
#[derive(Debug, Clone, Default)]
pub struct AssetFilter {
    /// Only assets in this status.
    pub status: Option<AssetStatus>,
    /// Only assets owned by this department.
    pub department: Option<String>,
    /// Only assets held by this custodian.
    pub custodian_id: Option<Uuid>,
    /// Case-insensitive match on name, tag, category, or serial number.
    pub search: Option<String>,
}

/// Repository for the asset registry.
#[derive(Debug, Clone)]
pub struct AssetRepository {
    pool: PgPool,
}

const FILTER_CLAUSE: &str = "($1::asset_status IS NULL OR status = $1) \
     AND ($2::text IS NULL OR department = $2) \
     AND ($3::uuid IS NULL OR custodian_id = $3) \
     AND ($4::text IS NULL OR name ILIKE $4 OR tag ILIKE $4 OR category ILIKE $4 \
          OR serial_number ILIKE $4)";

impl AssetRepository {
    /// Create a new asset repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an asset by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Asset>> {
        sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find asset", e))
    }

    /// Find an asset by its tag (barcode value, case-insensitive).
    pub async fn find_by_tag(&self, tag: &str) -> AppResult<Option<Asset>> {
        sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE UPPER(tag) = UPPER($1)")
            .bind(tag)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find asset by tag", e)
            })
    }

    /// List assets matching the filter, newest first.
    pub async fn find_all(
        &self,
        filter: &AssetFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Asset>> {
        let pattern = filter.search.as_ref().map(|s| format!("%{s}%"));

        let total: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM assets WHERE {FILTER_CLAUSE}"))
                .bind(filter.status)
                .bind(&filter.department)
                .bind(filter.custodian_id)
                .bind(&pattern)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count assets", e)
                })?;

        let assets = sqlx::query_as::<_, Asset>(&format!(
            "SELECT * FROM assets WHERE {FILTER_CLAUSE} \
             ORDER BY created_at DESC LIMIT $5 OFFSET $6"
        ))
        .bind(filter.status)
        .bind(&filter.department)
        .bind(filter.custodian_id)
        .bind(&pattern)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list assets", e))?;

        Ok(PageResponse::new(
            assets,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Register a new asset.
    pub async fn create(&self, data: &CreateAsset) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>(
            "INSERT INTO assets (id, tag, name, description, category, department, location, \
             serial_number, condition, purchase_date, purchase_cost, image_url, registered_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING *",
        )
        .bind(data.id)
        .bind(&data.tag)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.category)
        .bind(&data.department)
        .bind(&data.location)
        .bind(&data.serial_number)
        .bind(data.condition)
        .bind(data.purchase_date)
        .bind(data.purchase_cost)
        .bind(&data.image_url)
        .bind(data.registered_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(
                e,
                format!("Asset tag '{}' already exists", data.tag),
                "Failed to register asset",
            )
        })
    }

    /// Apply a partial update. Returns `None` if the asset does not exist.
    pub async fn update(&self, id: Uuid, data: &UpdateAsset) -> AppResult<Option<Asset>> {
        sqlx::query_as::<_, Asset>(
            "UPDATE assets SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                category = COALESCE($4, category), \
                location = COALESCE($5, location), \
                status = COALESCE($6, status), \
                condition = COALESCE($7, condition), \
                image_url = COALESCE($8, image_url), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.category)
        .bind(&data.location)
        .bind(data.status)
        .bind(data.condition)
        .bind(&data.image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update asset", e))
    }

    /// Delete an asset. Returns `false` if no row matched.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete asset", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of assets per status, for dashboards and reports.
    pub async fn count_by_status(&self) -> AppResult<Vec<(AssetStatus, i64)>> {
        sqlx::query_as::<_, (AssetStatus, i64)>(
            "SELECT status, COUNT(*) FROM assets GROUP BY status ORDER BY status",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count assets", e))
    }
}
