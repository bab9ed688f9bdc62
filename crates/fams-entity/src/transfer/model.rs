//! Asset transfer entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// State of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "transfer_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferStatus {
    /// Awaiting approval.
    Pending,
    /// Approved and applied to the asset.
    Completed,
    /// Rejected; the asset is unchanged.
    Rejected,
}

impl TransferStatus {
    /// Whether the transfer can still be reviewed.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Return the status as its wire/database string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A move of an asset between departments and/or custodians.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssetTransfer {
    /// Unique transfer identifier.
    pub id: Uuid,
    /// The asset being moved.
    pub asset_id: Uuid,
    /// Department at initiation time.
    pub from_department: String,
    /// Target department.
    pub to_department: String,
    /// Custodian at initiation time.
    pub from_custodian_id: Option<Uuid>,
    /// Target custodian.
    pub to_custodian_id: Option<Uuid>,
    /// Justification.
    pub reason: String,
    /// State.
    pub status: TransferStatus,
    /// Initiating user.
    pub initiated_by: Uuid,
    /// Approving/rejecting user.
    pub reviewed_by: Option<Uuid>,
    /// When the transfer was reviewed.
    pub reviewed_at: Option<DateTime<Utc>>,
    /// When the transfer was created.
    pub created_at: DateTime<Utc>,
    /// When the transfer was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to initiate a transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransfer {
    /// The asset being moved.
    pub asset_id: Uuid,
    /// Current department.
    pub from_department: String,
    /// Target department.
    pub to_department: String,
    /// Current custodian.
    pub from_custodian_id: Option<Uuid>,
    /// Target custodian.
    pub to_custodian_id: Option<Uuid>,
    /// Justification.
    pub reason: String,
    /// Initiating user.
    pub initiated_by: Uuid,
}
