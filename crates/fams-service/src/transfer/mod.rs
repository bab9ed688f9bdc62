//! Asset transfers between departments and custodians.

pub mod service;

pub use service::{InitiateTransfer, TransferService};
