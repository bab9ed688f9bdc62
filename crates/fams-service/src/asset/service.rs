//! Asset registry operations.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use fams_auth::rbac::Permission;
use fams_core::error::AppError;
use fams_core::types::pagination::{PageRequest, PageResponse};
use fams_database::repositories::{AssetFilter, AssetRepository};
use fams_entity::asset::{Asset, AssetCondition, AssetStatus, CreateAsset, UpdateAsset};

use crate::context::RequestContext;

/// Request to register a new asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterAssetRequest {
    /// Asset name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Category.
    pub category: String,
    /// Owning department.
    pub department: String,
    /// Location.
    pub location: Option<String>,
    /// Serial number.
    pub serial_number: Option<String>,
    /// Initial condition.
    pub condition: AssetCondition,
    /// Purchase date.
    pub purchase_date: Option<NaiveDate>,
    /// Purchase cost in minor currency units.
    pub purchase_cost: Option<i64>,
    /// URL returned by a previous upload.
    pub image_url: Option<String>,
}

/// Asset counts for dashboards.
#[derive(Debug, Clone, Serialize)]
pub struct AssetSummary {
    /// Total number of registered assets.
    pub total: i64,
    /// Count per status.
    pub by_status: Vec<(AssetStatus, i64)>,
}

/// Registers, looks up, and maintains assets.
#[derive(Debug, Clone)]
pub struct AssetService {
    asset_repo: Arc<AssetRepository>,
}

impl AssetService {
    /// Creates a new asset service.
    pub fn new(asset_repo: Arc<AssetRepository>) -> Self {
        Self { asset_repo }
    }

    /// Lists assets matching the filter.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        filter: AssetFilter,
        page: PageRequest,
    ) -> Result<PageResponse<Asset>, AppError> {
        ctx.require(Permission::ViewAssets)?;
        self.asset_repo.find_all(&filter, &page).await
    }

    /// Gets an asset by ID.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Asset, AppError> {
        ctx.require(Permission::ViewAssets)?;
        self.asset_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Asset {id} not found")))
    }

    /// Looks an asset up by its tag (the value encoded in its barcode).
    pub async fn get_by_tag(&self, ctx: &RequestContext, tag: &str) -> Result<Asset, AppError> {
        ctx.require(Permission::ViewAssets)?;
        self.asset_repo
            .find_by_tag(tag.trim())
            .await?
            .ok_or_else(|| AppError::not_found(format!("No asset with tag '{tag}'")))
    }

    /// Registers a new asset and assigns its tag.
    pub async fn register(
        &self,
        ctx: &RequestContext,
        req: RegisterAssetRequest,
    ) -> Result<Asset, AppError> {
        ctx.require(Permission::RegisterAssets)?;

        if req.name.trim().is_empty() {
            return Err(AppError::validation("Asset name is required"));
        }
        if req.category.trim().is_empty() || req.department.trim().is_empty() {
            return Err(AppError::validation("Category and department are required"));
        }
        if matches!(req.purchase_cost, Some(cost) if cost < 0) {
            return Err(AppError::validation("Purchase cost cannot be negative"));
        }

        let id = Uuid::now_v7();
        let asset = self
            .asset_repo
            .create(&CreateAsset {
                id,
                tag: Asset::tag_for(id),
                name: req.name.trim().to_string(),
                description: req.description,
                category: req.category.trim().to_string(),
                department: req.department.trim().to_string(),
                location: req.location,
                serial_number: req.serial_number,
                condition: req.condition,
                purchase_date: req.purchase_date,
                purchase_cost: req.purchase_cost,
                image_url: req.image_url,
                registered_by: ctx.user_id,
            })
            .await?;

        info!(asset_id = %asset.id, tag = %asset.tag, by = %ctx.user_id, "Asset registered");
        Ok(asset)
    }

    /// Updates an asset's descriptive fields or status.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        changes: UpdateAsset,
    ) -> Result<Asset, AppError> {
        ctx.require(Permission::UpdateAssets)?;

        if matches!(&changes.name, Some(name) if name.trim().is_empty()) {
            return Err(AppError::validation("Asset name cannot be blank"));
        }

        let asset = self
            .asset_repo
            .update(id, &changes)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Asset {id} not found")))?;

        info!(asset_id = %id, by = %ctx.user_id, "Asset updated");
        Ok(asset)
    }

    /// Removes an asset from the registry.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        ctx.require(Permission::DeleteAssets)?;

        if !self.asset_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Asset {id} not found")));
        }

        info!(asset_id = %id, by = %ctx.user_id, "Asset deleted");
        Ok(())
    }

    /// Asset counts by status.
    pub async fn summary(&self, ctx: &RequestContext) -> Result<AssetSummary, AppError> {
        ctx.require(Permission::ViewReports)?;
        let by_status = self.asset_repo.count_by_status().await?;
        let total = by_status.iter().map(|(_, n)| n).sum();
        Ok(AssetSummary { total, by_status })
    }
}
