//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// What triggered a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_kind", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    /// A request was approved or rejected.
    RequestReviewed,
    /// A new request awaits review.
    RequestSubmitted,
    /// A transfer was approved or rejected.
    TransferReviewed,
    /// A new transfer awaits approval.
    TransferSubmitted,
    /// An asset was allocated to the recipient.
    AssetAssigned,
    /// Administrative broadcast.
    Broadcast,
}

/// A notification delivered to a single user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user.
    pub user_id: Uuid,
    /// Trigger.
    pub kind: NotificationKind,
    /// Title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Related resource (request, transfer, or asset ID).
    pub resource_id: Option<Uuid>,
    /// Whether the user has read this notification.
    pub is_read: bool,
    /// When the notification was read.
    pub read_at: Option<DateTime<Utc>>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotification {
    /// Recipient.
    pub user_id: Uuid,
    /// Trigger.
    pub kind: NotificationKind,
    /// Title.
    pub title: String,
    /// Body.
    pub message: String,
    /// Related resource.
    pub resource_id: Option<Uuid>,
}
