//! RBAC enforcement logic: answers whether a role holds a permission.

use fams_core::error::AppError;
use fams_entity::user::UserRole;

use super::policies::Permission;

/// Whether `role` is listed for `permission` in the permission table.
pub fn has_permission(role: UserRole, permission: Permission) -> bool {
    permission.allowed_roles().contains(&role)
}

/// Whether `role` holds at least one of `permissions`. False when empty.
pub fn has_any_permission(role: UserRole, permissions: &[Permission]) -> bool {
    permissions.iter().any(|p| has_permission(role, *p))
}

/// Whether `role` holds every one of `permissions`. True when empty.
pub fn has_all_permissions(role: UserRole, permissions: &[Permission]) -> bool {
    permissions.iter().all(|p| has_permission(role, *p))
}

/// Enforces role-based access control for privileged operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct RbacEnforcer;

impl RbacEnforcer {
    /// Creates a new enforcer over the static permission table.
    pub fn new() -> Self {
        Self
    }

    /// Checks whether the given role has the required permission.
    ///
    /// Returns `Ok(())` if allowed, or an authorization error if denied.
    pub fn require_permission(&self, role: UserRole, permission: Permission) -> Result<(), AppError> {
        if has_permission(role, permission) {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Role '{}' does not have permission '{permission}'",
                role.label()
            )))
        }
    }

    /// Checks whether the role has the required permission (returns bool).
    pub fn has_permission(&self, role: UserRole, permission: Permission) -> bool {
        has_permission(role, permission)
    }

    /// Requires at least one of the given permissions.
    pub fn require_any(&self, role: UserRole, permissions: &[Permission]) -> Result<(), AppError> {
        if has_any_permission(role, permissions) {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Role '{}' lacks every permission required for this action",
                role.label()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fams_core::error::ErrorKind;
    use UserRole::{CourseRep, DepartmentalOfficer, FacultyAdmin, Lecturer};

    /// Expected allow-list, written out independently of the table.
    fn expected(permission: Permission) -> &'static [UserRole] {
        match permission {
            Permission::ViewAssets => &[FacultyAdmin, DepartmentalOfficer, Lecturer, CourseRep],
            Permission::RegisterAssets
            | Permission::UpdateAssets
            | Permission::ViewAllRequests
            | Permission::ApproveRequests
            | Permission::InitiateTransfers
            | Permission::ViewReports => &[FacultyAdmin, DepartmentalOfficer],
            Permission::DeleteAssets
            | Permission::ApproveTransfers
            | Permission::ManageUsers
            | Permission::SendNotifications => &[FacultyAdmin],
            Permission::CreateRequests => &[DepartmentalOfficer, Lecturer, CourseRep],
        }
    }

    #[test]
    fn test_has_permission_full_cross_product() {
        for role in UserRole::ALL {
            for permission in Permission::ALL {
                assert_eq!(
                    has_permission(role, permission),
                    expected(permission).contains(&role),
                    "{role} / {permission}"
                );
            }
        }
    }

    #[test]
    fn test_empty_any_is_false_and_empty_all_is_true() {
        for role in UserRole::ALL {
            assert!(!has_any_permission(role, &[]));
            assert!(has_all_permissions(role, &[]));
        }
    }

    #[test]
    fn test_any_and_all_combinations() {
        let mixed = [Permission::ManageUsers, Permission::CreateRequests];
        assert!(has_any_permission(Lecturer, &mixed));
        assert!(!has_all_permissions(Lecturer, &mixed));
        assert!(has_any_permission(FacultyAdmin, &mixed));
        assert!(!has_all_permissions(FacultyAdmin, &mixed));

        let officer_set = [Permission::RegisterAssets, Permission::ApproveRequests];
        assert!(has_all_permissions(DepartmentalOfficer, &officer_set));
        assert!(!has_any_permission(CourseRep, &officer_set));
    }

    #[test]
    fn test_require_permission_denied_is_authorization_error() {
        let enforcer = RbacEnforcer::new();
        assert!(enforcer.require_permission(FacultyAdmin, Permission::ManageUsers).is_ok());

        let err = enforcer
            .require_permission(CourseRep, Permission::RegisterAssets)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
        assert!(err.message.contains("REGISTER_ASSETS"));
    }

    #[test]
    fn test_require_any() {
        let enforcer = RbacEnforcer::new();
        assert!(enforcer.require_any(Lecturer, &[Permission::ViewAssets]).is_ok());
        assert!(enforcer.require_any(Lecturer, &[]).is_err());
    }
}
