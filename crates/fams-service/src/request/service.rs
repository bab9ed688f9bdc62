//! Submitting and reviewing asset requests.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use fams_auth::rbac::Permission;
use fams_core::error::AppError;
use fams_core::types::pagination::{PageRequest, PageResponse};
use fams_database::repositories::{AssetRepository, RequestRepository};
use fams_entity::asset::AssetStatus;
use fams_entity::notification::NotificationKind;
use fams_entity::request::{AssetRequest, CreateAssetRequest, RequestStatus};
use fams_entity::user::UserRole;

use crate::context::RequestContext;
use crate::notification::NotificationService;

/// A new asset request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRequest {
    /// Specific asset wanted, if any.
    pub asset_id: Option<Uuid>,
    /// Short title.
    pub title: String,
    /// Justification.
    pub reason: String,
    /// Number of items.
    pub quantity: i32,
}

/// Reviewer's verdict on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    /// Approve (and allocate the named asset, if any).
    Approve,
    /// Reject.
    Reject,
}

impl ReviewDecision {
    fn status(self) -> RequestStatus {
        match self {
            Self::Approve => RequestStatus::Approved,
            Self::Reject => RequestStatus::Rejected,
        }
    }
}

/// Handles the asset request workflow.
#[derive(Debug, Clone)]
pub struct RequestService {
    request_repo: Arc<RequestRepository>,
    asset_repo: Arc<AssetRepository>,
    notifications: Arc<NotificationService>,
}

impl RequestService {
    /// Creates a new request service.
    pub fn new(
        request_repo: Arc<RequestRepository>,
        asset_repo: Arc<AssetRepository>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            request_repo,
            asset_repo,
            notifications,
        }
    }

    /// Submits a request and notifies departmental officers.
    pub async fn submit(
        &self,
        ctx: &RequestContext,
        req: SubmitRequest,
    ) -> Result<AssetRequest, AppError> {
        ctx.require(Permission::CreateRequests)?;

        if req.title.trim().is_empty() || req.reason.trim().is_empty() {
            return Err(AppError::validation("Title and reason are required"));
        }
        if req.quantity < 1 {
            return Err(AppError::validation("Quantity must be at least 1"));
        }

        if let Some(asset_id) = req.asset_id {
            let asset = self
                .asset_repo
                .find_by_id(asset_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Asset {asset_id} not found")))?;
            if asset.status != AssetStatus::Available {
                return Err(AppError::conflict(format!(
                    "Asset {} is not available ({})",
                    asset.tag, asset.status
                )));
            }
        }

        let request = self
            .request_repo
            .create(&CreateAssetRequest {
                requester_id: ctx.user_id,
                asset_id: req.asset_id,
                title: req.title.trim().to_string(),
                reason: req.reason.trim().to_string(),
                quantity: req.quantity,
            })
            .await?;

        info!(request_id = %request.id, requester = %ctx.user_id, "Asset request submitted");

        self.notifications
            .notify_role(
                UserRole::DepartmentalOfficer,
                ctx.user_id,
                NotificationKind::RequestSubmitted,
                "New asset request",
                &format!("{} requested: {}", ctx.name, request.title),
                Some(request.id),
            )
            .await;

        Ok(request)
    }

    /// Lists requests: every request for reviewers, otherwise the caller's own.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        status: Option<RequestStatus>,
        page: PageRequest,
    ) -> Result<PageResponse<AssetRequest>, AppError> {
        ctx.require_any(&[Permission::CreateRequests, Permission::ViewAllRequests])?;

        let requester = if ctx.can(Permission::ViewAllRequests) {
            None
        } else {
            Some(ctx.user_id)
        };
        self.request_repo.find_all(requester, status, &page).await
    }

    /// Gets one request. Visible to its requester and to reviewers.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<AssetRequest, AppError> {
        let request = self
            .request_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Request {id} not found")))?;

        if request.requester_id != ctx.user_id {
            ctx.require(Permission::ViewAllRequests)?;
        }
        Ok(request)
    }

    /// Approves or rejects a pending request and notifies the requester.
    pub async fn review(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        decision: ReviewDecision,
        note: Option<String>,
    ) -> Result<AssetRequest, AppError> {
        ctx.require(Permission::ApproveRequests)?;

        let existing = self
            .request_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Request {id} not found")))?;
        if !existing.status.is_pending() {
            return Err(AppError::conflict(format!(
                "Request has already been {}",
                existing.status
            )));
        }
        if existing.requester_id == ctx.user_id {
            return Err(AppError::authorization("You cannot review your own request"));
        }

        let note = note.filter(|n| !n.trim().is_empty());
        let reviewed = self
            .request_repo
            .review(id, decision.status(), ctx.user_id, note.as_deref())
            .await?
            .ok_or_else(|| AppError::conflict("Request is no longer pending"))?;

        info!(
            request_id = %id,
            reviewer = %ctx.user_id,
            status = %reviewed.status,
            "Asset request reviewed"
        );

        let verdict = match decision {
            ReviewDecision::Approve => "approved",
            ReviewDecision::Reject => "rejected",
        };
        self.notifications
            .notify(
                reviewed.requester_id,
                NotificationKind::RequestReviewed,
                format!("Request {verdict}"),
                format!("Your request \"{}\" was {verdict}", reviewed.title),
                Some(reviewed.id),
            )
            .await;

        Ok(reviewed)
    }
}
