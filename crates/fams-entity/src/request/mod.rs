//! Asset request entities.

pub mod model;

pub use model::{AssetRequest, CreateAssetRequest, RequestStatus};
