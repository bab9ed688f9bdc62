//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use fams_entity::asset::{AssetCondition, AssetStatus, UpdateAsset};
use fams_entity::request::RequestStatus;
use fams_entity::transfer::TransferStatus;
use fams_entity::user::UserRole;
use fams_service::asset::RegisterAssetRequest;
use fams_service::notification::BroadcastRequest;
use fams_service::request::SubmitRequest;
use fams_service::transfer::InitiateTransfer;
use fams_service::user::CreateUserRequest;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create user request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserBody {
    /// Email.
    #[validate(email)]
    pub email: String,
    /// Initial password; the length policy is enforced by the service.
    #[validate(length(min = 1, max = 256))]
    pub password: String,
    /// Display name.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Role.
    pub role: UserRole,
    /// Department.
    #[validate(length(max = 200))]
    pub department: Option<String>,
}

impl From<CreateUserBody> for CreateUserRequest {
    fn from(body: CreateUserBody) -> Self {
        Self {
            email: body.email,
            password: body.password,
            name: body.name,
            role: body.role,
            department: body.department,
        }
    }
}

/// Query for the user list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListQuery {
    /// Only users with this role.
    pub role: Option<UserRole>,
}

/// Asset registration body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterAssetBody {
    /// Name.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Description.
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    /// Category.
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    /// Owning department.
    #[validate(length(min = 1, max = 200))]
    pub department: String,
    /// Location.
    pub location: Option<String>,
    /// Serial number.
    pub serial_number: Option<String>,
    /// Condition (default `GOOD`).
    pub condition: Option<AssetCondition>,
    /// Purchase date.
    pub purchase_date: Option<NaiveDate>,
    /// Purchase cost in minor units.
    #[validate(range(min = 0))]
    pub purchase_cost: Option<i64>,
    /// URL from a previous upload.
    pub image_url: Option<String>,
}

impl From<RegisterAssetBody> for RegisterAssetRequest {
    fn from(body: RegisterAssetBody) -> Self {
        Self {
            name: body.name,
            description: body.description,
            category: body.category,
            department: body.department,
            location: body.location,
            serial_number: body.serial_number,
            condition: body.condition.unwrap_or(AssetCondition::Good),
            purchase_date: body.purchase_date,
            purchase_cost: body.purchase_cost,
            image_url: body.image_url,
        }
    }
}

/// Asset update body. Omitted fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateAssetBody {
    /// Name.
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    /// Description.
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    /// Category.
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
    /// Location.
    pub location: Option<String>,
    /// Status.
    pub status: Option<AssetStatus>,
    /// Condition.
    pub condition: Option<AssetCondition>,
    /// Image URL.
    pub image_url: Option<String>,
}

impl From<UpdateAssetBody> for UpdateAsset {
    fn from(body: UpdateAssetBody) -> Self {
        Self {
            name: body.name,
            description: body.description,
            category: body.category,
            location: body.location,
            status: body.status,
            condition: body.condition,
            image_url: body.image_url,
        }
    }
}

/// Asset list filters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetListQuery {
    /// Status.
    pub status: Option<AssetStatus>,
    /// Department.
    pub department: Option<String>,
    /// Custodian.
    pub custodian_id: Option<Uuid>,
    /// Free-text search.
    pub search: Option<String>,
}

/// New asset request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitRequestBody {
    /// Specific asset, if any.
    pub asset_id: Option<Uuid>,
    /// Title.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Reason.
    #[validate(length(min = 1, max = 2000))]
    pub reason: String,
    /// Quantity (default 1).
    #[validate(range(min = 1, max = 1000))]
    pub quantity: Option<i32>,
}

impl From<SubmitRequestBody> for SubmitRequest {
    fn from(body: SubmitRequestBody) -> Self {
        Self {
            asset_id: body.asset_id,
            title: body.title,
            reason: body.reason,
            quantity: body.quantity.unwrap_or(1),
        }
    }
}

/// Optional reviewer note.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ReviewBody {
    /// Note shown to the requester.
    #[validate(length(max = 1000))]
    pub note: Option<String>,
}

/// Request list filters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestListQuery {
    /// Status.
    pub status: Option<RequestStatus>,
}

/// New transfer body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InitiateTransferBody {
    /// Asset.
    pub asset_id: Uuid,
    /// Receiving department.
    #[validate(length(min = 1, max = 200))]
    pub to_department: Option<String>,
    /// New custodian.
    pub to_custodian_id: Option<Uuid>,
    /// Reason.
    #[validate(length(min = 1, max = 2000))]
    pub reason: String,
}

impl From<InitiateTransferBody> for InitiateTransfer {
    fn from(body: InitiateTransferBody) -> Self {
        Self {
            asset_id: body.asset_id,
            to_department: body.to_department,
            to_custodian_id: body.to_custodian_id,
            reason: body.reason,
        }
    }
}

/// Transfer list filters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransferListQuery {
    /// Asset.
    pub asset_id: Option<Uuid>,
    /// Status.
    pub status: Option<TransferStatus>,
}

/// Notification list filters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotificationListQuery {
    /// Only unread.
    #[serde(default)]
    pub unread_only: bool,
}

/// Broadcast body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BroadcastBody {
    /// Recipients' role.
    pub role: UserRole,
    /// Title.
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Message.
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}

impl From<BroadcastBody> for BroadcastRequest {
    fn from(body: BroadcastBody) -> Self {
        Self {
            role: body.role,
            title: body.title,
            message: body.message,
        }
    }
}
