//! Asset request entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Review state of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "request_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    /// Awaiting review.
    Pending,
    /// Approved by a reviewer.
    Approved,
    /// Rejected by a reviewer.
    Rejected,
}

impl RequestStatus {
    /// Whether the request can still be reviewed.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Return the status as its wire/database string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's request for an asset.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssetRequest {
    /// Unique request identifier.
    pub id: Uuid,
    /// Requesting user.
    pub requester_id: Uuid,
    /// Specific asset requested, if any.
    pub asset_id: Option<Uuid>,
    /// Short title ("Projector for LT2").
    pub title: String,
    /// Justification.
    pub reason: String,
    /// Quantity requested.
    pub quantity: i32,
    /// Review state.
    pub status: RequestStatus,
    /// Reviewer, once reviewed.
    pub reviewed_by: Option<Uuid>,
    /// Reviewer's note.
    pub review_note: Option<String>,
    /// When the request was reviewed.
    pub reviewed_at: Option<DateTime<Utc>>,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
    /// When the request was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssetRequest {
    /// Requesting user.
    pub requester_id: Uuid,
    /// Specific asset, if any.
    pub asset_id: Option<Uuid>,
    /// Title.
    pub title: String,
    /// Justification.
    pub reason: String,
    /// Quantity.
    pub quantity: i32,
}
