//! Asset entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::{AssetCondition, AssetStatus};

/// Prefix of every generated asset tag.
pub const ASSET_TAG_PREFIX: &str = "FAC";

/// A registered faculty asset.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Asset {
    /// Unique asset identifier.
    pub id: Uuid,
    /// Human-readable unique tag, the value encoded in the asset's barcode.
    pub tag: String,
    /// Asset name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Category (e.g. "Projector", "Laptop").
    pub category: String,
    /// Owning department.
    pub department: String,
    /// Physical location (building/room).
    pub location: Option<String>,
    /// Manufacturer serial number.
    pub serial_number: Option<String>,
    /// Lifecycle status.
    pub status: AssetStatus,
    /// Physical condition.
    pub condition: AssetCondition,
    /// Purchase date.
    pub purchase_date: Option<NaiveDate>,
    /// Purchase cost in minor currency units.
    pub purchase_cost: Option<i64>,
    /// Public URL of an uploaded image or document.
    pub image_url: Option<String>,
    /// Current custodian, when allocated.
    pub custodian_id: Option<Uuid>,
    /// The user who registered the asset.
    pub registered_by: Uuid,
    /// When the asset was registered.
    pub created_at: DateTime<Utc>,
    /// When the asset was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Asset {
    /// Build a tag from a UUID: `FAC-` followed by eight upper-case hex digits.
    pub fn tag_for(id: Uuid) -> String {
        let simple = id.simple().to_string().to_uppercase();
        format!("{ASSET_TAG_PREFIX}-{}", &simple[simple.len() - 8..])
    }
}

/// Data required to register a new asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAsset {
    /// Pre-generated asset ID.
    pub id: Uuid,
    /// Generated tag.
    pub tag: String,
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
    /// Uploaded image/document URL.
    pub image_url: Option<String>,
    /// Registering user.
    pub registered_by: Uuid,
}

/// Partial update of an asset's descriptive fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAsset {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New category.
    pub category: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New status.
    pub status: Option<AssetStatus>,
    /// New condition.
    pub condition: Option<AssetCondition>,
    /// New image URL.
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_format() {
        let id = Uuid::parse_str("0190f5c2-7a1b-7cde-8f00-1234abcd5678").unwrap();
        assert_eq!(Asset::tag_for(id), "FAC-ABCD5678");
    }
}
