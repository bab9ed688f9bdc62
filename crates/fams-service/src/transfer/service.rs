//! Initiating and approving asset transfers.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use fams_auth::rbac::Permission;
use fams_core::error::AppError;
use fams_core::types::pagination::{PageRequest, PageResponse};
use fams_database::repositories::{AssetRepository, TransferRepository, UserRepository};
use fams_entity::notification::NotificationKind;
use fams_entity::transfer::{AssetTransfer, CreateTransfer, TransferStatus};
use fams_entity::user::UserRole;

use crate::context::RequestContext;
use crate::notification::NotificationService;
use crate::request::ReviewDecision;

/// A request to move an asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitiateTransfer {
    /// Asset to move.
    pub asset_id: Uuid,
    /// Receiving department. Defaults to the asset's current department.
    pub to_department: Option<String>,
    /// New custodian, if any.
    pub to_custodian_id: Option<Uuid>,
    /// Justification.
    pub reason: String,
}

/// Handles the transfer workflow.
#[derive(Debug, Clone)]
pub struct TransferService {
    transfer_repo: Arc<TransferRepository>,
    asset_repo: Arc<AssetRepository>,
    user_repo: Arc<UserRepository>,
    notifications: Arc<NotificationService>,
}

impl TransferService {
    /// Creates a new transfer service.
    pub fn new(
        transfer_repo: Arc<TransferRepository>,
        asset_repo: Arc<AssetRepository>,
        user_repo: Arc<UserRepository>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            transfer_repo,
            asset_repo,
            user_repo,
            notifications,
        }
    }

    /// Starts a pending transfer. The asset's current department and
    /// custodian are recorded as the origin.
    pub async fn initiate(
        &self,
        ctx: &RequestContext,
        req: InitiateTransfer,
    ) -> Result<AssetTransfer, AppError> {
        ctx.require(Permission::InitiateTransfers)?;

        if req.reason.trim().is_empty() {
            return Err(AppError::validation("A reason is required"));
        }

        let asset = self
            .asset_repo
            .find_by_id(req.asset_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Asset {} not found", req.asset_id)))?;
        if !asset.status.is_active() {
            return Err(AppError::conflict(format!(
                "Asset {} has been disposed and cannot be transferred",
                asset.tag
            )));
        }

        let to_department = req
            .to_department
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| asset.department.clone());

        if to_department == asset.department && req.to_custodian_id == asset.custodian_id {
            return Err(AppError::validation(
                "Transfer must change the department or the custodian",
            ));
        }

        if let Some(custodian_id) = req.to_custodian_id {
            if self.user_repo.find_by_id(custodian_id).await?.is_none() {
                return Err(AppError::not_found(format!("User {custodian_id} not found")));
            }
        }

        let transfer = self
            .transfer_repo
            .create(&CreateTransfer {
                asset_id: asset.id,
                from_department: asset.department.clone(),
                to_department,
                from_custodian_id: asset.custodian_id,
                to_custodian_id: req.to_custodian_id,
                reason: req.reason.trim().to_string(),
                initiated_by: ctx.user_id,
            })
            .await?;

        info!(
            transfer_id = %transfer.id,
            asset_id = %asset.id,
            from = %transfer.from_department,
            to = %transfer.to_department,
            "Transfer initiated"
        );

        self.notifications
            .notify_role(
                UserRole::FacultyAdmin,
                ctx.user_id,
                NotificationKind::TransferSubmitted,
                "Transfer awaiting approval",
                &format!(
                    "{} to {} for asset {}",
                    transfer.from_department, transfer.to_department, asset.tag
                ),
                Some(transfer.id),
            )
            .await;

        Ok(transfer)
    }

    /// Lists transfers, optionally for one asset and/or status.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        asset_id: Option<Uuid>,
        status: Option<TransferStatus>,
        page: PageRequest,
    ) -> Result<PageResponse<AssetTransfer>, AppError> {
        ctx.require(Permission::ViewAssets)?;
        self.transfer_repo.find_all(asset_id, status, &page).await
    }

    /// Approves (and applies) or rejects a pending transfer.
    pub async fn review(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        decision: ReviewDecision,
    ) -> Result<AssetTransfer, AppError> {
        ctx.require(Permission::ApproveTransfers)?;

        let existing = self
            .transfer_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Transfer {id} not found")))?;
        if !existing.status.is_pending() {
            return Err(AppError::conflict(format!(
                "Transfer has already been {}",
                existing.status
            )));
        }

        let reviewed = match decision {
            ReviewDecision::Approve => self.transfer_repo.complete(id, ctx.user_id).await?,
            ReviewDecision::Reject => self.transfer_repo.reject(id, ctx.user_id).await?,
        }
        .ok_or_else(|| AppError::conflict("Transfer is no longer pending"))?;

        info!(
            transfer_id = %id,
            reviewer = %ctx.user_id,
            status = %reviewed.status,
            "Transfer reviewed"
        );

        if reviewed.initiated_by != ctx.user_id {
            self.notifications
                .notify(
                    reviewed.initiated_by,
                    NotificationKind::TransferReviewed,
                    format!("Transfer {}", reviewed.status.as_str().to_lowercase()),
                    format!(
                        "Transfer to {} was {}",
                        reviewed.to_department,
                        reviewed.status.as_str().to_lowercase()
                    ),
                    Some(reviewed.id),
                )
                .await;
        }

        if let Some(custodian_id) = reviewed.to_custodian_id {
            if reviewed.status == TransferStatus::Completed {
                self.notifications
                    .notify(
                        custodian_id,
                        NotificationKind::AssetAssigned,
                        "Asset assigned to you",
                        format!("An asset was transferred to you in {}", reviewed.to_department),
                        Some(reviewed.asset_id),
                    )
                    .await;
            }
        }

        Ok(reviewed)
    }
}
