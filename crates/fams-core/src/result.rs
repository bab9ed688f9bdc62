//! Convenience result type alias for FAMS.

use crate::error::AppError;

/// A specialized `Result` type for FAMS operations.
pub type AppResult<T> = Result<T, AppError>;
