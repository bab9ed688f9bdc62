//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod pagination;
pub mod token;

pub use auth::{AuthUser, CurrentSession};
pub use json::ValidatedJson;
pub use pagination::PaginationParams;
pub use token::session_token;
