//! The request session and the session resolver seam.

pub mod resolver;

pub use resolver::{JwtSessionResolver, SessionResolver};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fams_entity::user::UserRole;

use crate::jwt::Claims;

/// The authenticated identity of one request. Read-only and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The user's ID.
    pub user_id: Uuid,
    /// The user's role.
    pub role: UserRole,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
}

impl From<Claims> for Session {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            role: claims.role,
            name: claims.name,
            email: claims.email,
        }
    }
}
