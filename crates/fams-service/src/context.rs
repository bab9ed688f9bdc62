//! Request context carrying the authenticated user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fams_auth::rbac::{Permission, RbacEnforcer};
use fams_auth::session::Session;
use fams_core::error::AppError;
use fams_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Built from the resolved [`Session`] and passed into service methods so
/// that every operation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's role at the time the session token was issued.
    pub role: UserRole,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, role: UserRole, name: String, email: String) -> Self {
        Self {
            user_id,
            role,
            name,
            email,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is the faculty administrator.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Whether the current user holds `permission`.
    pub fn can(&self, permission: Permission) -> bool {
        RbacEnforcer::new().has_permission(self.role, permission)
    }

    /// Fails with an authorization error unless the user holds `permission`.
    pub fn require(&self, permission: Permission) -> Result<(), AppError> {
        RbacEnforcer::new().require_permission(self.role, permission)
    }

    /// Fails unless the user holds at least one of `permissions`.
    pub fn require_any(&self, permissions: &[Permission]) -> Result<(), AppError> {
        RbacEnforcer::new().require_any(self.role, permissions)
    }
}

impl From<Session> for RequestContext {
    fn from(session: Session) -> Self {
        Self::new(session.user_id, session.role, session.name, session.email)
    }
}

impl From<&Session> for RequestContext {
    fn from(session: &Session) -> Self {
        Self::from(session.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fams_core::error::ErrorKind;

    fn ctx(role: UserRole) -> RequestContext {
        RequestContext::new(Uuid::new_v4(), role, "T".into(), "t@faculty.example".into())
    }

    #[test]
    fn test_require_follows_permission_table() {
        assert!(ctx(UserRole::DepartmentalOfficer).require(Permission::RegisterAssets).is_ok());
        let err = ctx(UserRole::Lecturer)
            .require(Permission::RegisterAssets)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[test]
    fn test_every_role_may_list_requests() {
        for role in UserRole::ALL {
            assert!(
                ctx(role)
                    .require_any(&[Permission::CreateRequests, Permission::ViewAllRequests])
                    .is_ok(),
                "{role}"
            );
        }
    }
}
