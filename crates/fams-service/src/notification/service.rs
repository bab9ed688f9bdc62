//! Notification listing, read-state management, and delivery.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use fams_auth::rbac::Permission;
use fams_core::error::AppError;
use fams_core::types::pagination::{PageRequest, PageResponse};
use fams_database::repositories::{NotificationRepository, UserRepository};
use fams_entity::notification::{CreateNotification, Notification, NotificationKind};
use fams_entity::user::UserRole;

use crate::context::RequestContext;

/// A message sent to every user holding a role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastRequest {
    /// Recipients' role.
    pub role: UserRole,
    /// Title.
    pub title: String,
    /// Body.
    pub message: String,
}

/// Manages user notifications.
#[derive(Debug, Clone)]
pub struct NotificationService {
    notif_repo: Arc<NotificationRepository>,
    user_repo: Arc<UserRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notif_repo: Arc<NotificationRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            notif_repo,
            user_repo,
        }
    }

    /// Lists notifications for the current user.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        unread_only: bool,
        page: PageRequest,
    ) -> Result<PageResponse<Notification>, AppError> {
        self.notif_repo
            .find_by_user(ctx.user_id, unread_only, &page)
            .await
    }

    /// Gets the unread notification count.
    pub async fn unread_count(&self, ctx: &RequestContext) -> Result<i64, AppError> {
        self.notif_repo.count_unread(ctx.user_id).await
    }

    /// Marks one of the current user's notifications as read.
    pub async fn mark_read(
        &self,
        ctx: &RequestContext,
        notification_id: Uuid,
    ) -> Result<(), AppError> {
        if self.notif_repo.mark_read(notification_id, ctx.user_id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Notification not found"))
        }
    }

    /// Marks all notifications as read for the current user.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> Result<u64, AppError> {
        self.notif_repo.mark_all_read(ctx.user_id).await
    }

    /// Sends a broadcast to every user with the given role.
    ///
    /// Best effort: a failed insert is logged and skipped. Returns the
    /// number of notifications actually delivered.
    pub async fn broadcast(
        &self,
        ctx: &RequestContext,
        req: BroadcastRequest,
    ) -> Result<usize, AppError> {
        ctx.require(Permission::SendNotifications)?;

        if req.title.trim().is_empty() || req.message.trim().is_empty() {
            return Err(AppError::validation("Broadcast title and message are required"));
        }

        let recipients = self.user_repo.find_ids_by_role(req.role).await?;
        let repo = &self.notif_repo;
        let delivered = deliver_each(&recipients, |user_id| {
            let data = CreateNotification {
                user_id,
                kind: NotificationKind::Broadcast,
                title: req.title.clone(),
                message: req.message.clone(),
                resource_id: None,
            };
            async move { repo.create(&data).await.map(|_| ()) }
        })
        .await;

        info!(
            sender = %ctx.user_id,
            role = %req.role,
            recipients = recipients.len(),
            delivered,
            "Broadcast sent"
        );
        Ok(delivered)
    }

    /// Delivers a notification as a side effect of another operation.
    ///
    /// Failures are logged and swallowed so the triggering operation still
    /// succeeds.
    pub async fn notify(
        &self,
        user_id: Uuid,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        resource_id: Option<Uuid>,
    ) {
        let data = CreateNotification {
            user_id,
            kind,
            title: title.into(),
            message: message.into(),
            resource_id,
        };
        if let Err(e) = self.notif_repo.create(&data).await {
            warn!(user_id = %user_id, kind = ?kind, error = %e, "Failed to deliver notification");
        }
    }

    /// Notifies every user holding `role`, except `skip`.
    pub async fn notify_role(
        &self,
        role: UserRole,
        skip: Uuid,
        kind: NotificationKind,
        title: &str,
        message: &str,
        resource_id: Option<Uuid>,
    ) {
        let recipients = match self.user_repo.find_ids_by_role(role).await {
            Ok(ids) => ids,
            Err(e) => {
                warn!(role = %role, error = %e, "Failed to resolve notification recipients");
                return;
            }
        };
        for user_id in recipients.into_iter().filter(|id| *id != skip) {
            self.notify(user_id, kind, title, message, resource_id).await;
        }
    }
}

/// Runs `deliver` for each recipient, logging failures, and returns the
/// number that succeeded.
async fn deliver_each<F, Fut>(recipients: &[Uuid], mut deliver: F) -> usize
where
    F: FnMut(Uuid) -> Fut,
    Fut: Future<Output = Result<(), AppError>>,
{
    let mut delivered = 0;
    for &user_id in recipients {
        match deliver(user_id).await {
            Ok(()) => delivered += 1,
            Err(e) => warn!(user_id = %user_id, error = %e, "Failed to deliver broadcast"),
        }
    }
    delivered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failed_delivery_does_not_stop_the_rest() {
        let recipients: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
        let failing = recipients[1];
        let mut attempted = Vec::new();

        let delivered = deliver_each(&recipients, |id| {
            attempted.push(id);
            async move {
                if id == failing {
                    Err(AppError::internal("insert failed"))
                } else {
                    Ok(())
                }
            }
        })
        .await;

        assert_eq!(delivered, 3);
        assert_eq!(attempted, recipients);
    }

    #[tokio::test]
    async fn test_no_recipients_delivers_nothing() {
        let delivered = deliver_each(&[], |_| async { Ok(()) }).await;
        assert_eq!(delivered, 0);
    }
}
