//! Asset transfer entities.

pub mod model;

pub use model::{AssetTransfer, CreateTransfer, TransferStatus};
