//! Asset lifecycle status and physical condition.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where an asset is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "asset_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    /// In store and free to be allocated.
    Available,
    /// Allocated to a custodian.
    InUse,
    /// Out of service for repair.
    UnderMaintenance,
    /// Written off; no further transfers or allocations.
    Disposed,
}

impl AssetStatus {
    /// Whether the asset may still be allocated or moved.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Disposed)
    }

    /// Return the status as its wire/database string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::InUse => "IN_USE",
            Self::UnderMaintenance => "UNDER_MAINTENANCE",
            Self::Disposed => "DISPOSED",
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetStatus {
    type Err = fams_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "AVAILABLE" => Ok(Self::Available),
            "IN_USE" => Ok(Self::InUse),
            "UNDER_MAINTENANCE" => Ok(Self::UnderMaintenance),
            "DISPOSED" => Ok(Self::Disposed),
            _ => Err(fams_core::AppError::validation(format!(
                "Invalid asset status: '{s}'"
            ))),
        }
    }
}

/// Physical condition recorded at registration or inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "asset_condition", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetCondition {
    /// New or like new.
    New,
    /// Working with normal wear.
    Good,
    /// Working but degraded.
    Fair,
    /// Not working.
    Faulty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!("in-use".parse::<AssetStatus>().unwrap(), AssetStatus::InUse);
        assert_eq!(
            "UNDER_MAINTENANCE".parse::<AssetStatus>().unwrap(),
            AssetStatus::UnderMaintenance
        );
        assert!("lost".parse::<AssetStatus>().is_err());
    }

    #[test]
    fn test_disposed_is_inactive() {
        assert!(!AssetStatus::Disposed.is_active());
        assert!(AssetStatus::InUse.is_active());
    }
}
