//! Repository implementations for all FAMS entities.

pub mod asset;
pub mod notification;
pub mod request;
pub mod transfer;
pub mod user;

pub use asset::{AssetFilter, AssetRepository};
pub use notification::NotificationRepository;
pub use request::RequestRepository;
pub use transfer::TransferRepository;
pub use user::UserRepository;

use fams_core::error::{AppError, ErrorKind};

/// Map a sqlx error, turning unique-constraint violations into conflicts.
pub(crate) fn map_write_error(
    err: sqlx::Error,
    conflict_message: impl Into<String>,
    context: &'static str,
) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::conflict(conflict_message)
        }
        _ => AppError::with_source(ErrorKind::Database, context, err),
    }
}
