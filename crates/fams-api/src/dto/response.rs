//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fams_auth::rbac::Permission;
use fams_auth::session::Session;
use fams_entity::user::{User, UserRole};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Role.
    pub role: UserRole,
    /// Department.
    pub department: Option<String>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Last login.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            department: user.department,
            created_at: user.created_at,
            last_login_at: user.last_login_at,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Session token (also set as a cookie).
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// Where the signed-in user's dashboard lives.
    pub redirect_to: String,
    /// User info.
    pub user: UserResponse,
}

/// The current session, as exposed to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// User ID.
    pub user_id: Uuid,
    /// Role.
    pub role: UserRole,
    /// Display name.
    pub name: String,
    /// Email.
    pub email: String,
    /// The role's dashboard path.
    pub dashboard: String,
    /// Permissions held by the role.
    pub permissions: Vec<Permission>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            user_id: session.user_id,
            role: session.role,
            dashboard: session.role.dashboard_path().to_string(),
            permissions: fams_auth::rbac::PermissionTable::permissions_for_role(session.role),
            name: session.name,
            email: session.email,
        }
    }
}

/// One entry in a dashboard's navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    /// Label.
    pub label: String,
    /// Target path.
    pub href: String,
    /// Permission the item needs.
    pub permission: Permission,
}

/// A role dashboard's navigation document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// The area's role.
    pub area: UserRole,
    /// Title.
    pub title: String,
    /// Who is viewing it.
    pub viewer: SessionResponse,
    /// Sections the viewer may open.
    pub sections: Vec<NavItem>,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Count response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    /// Count value.
    pub count: i64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Database reachability, for readiness checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}
