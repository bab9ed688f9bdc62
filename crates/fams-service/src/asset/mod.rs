//! Asset registry and asset file uploads.

pub mod service;
pub mod upload;

pub use service::{AssetService, AssetSummary, RegisterAssetRequest};
pub use upload::{StoredUpload, UploadParams, UploadService};
