//! Asset registry entities.

pub mod model;
pub mod status;

pub use model::{Asset, CreateAsset, UpdateAsset};
pub use status::{AssetCondition, AssetStatus};
