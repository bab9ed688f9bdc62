//! Permission-to-role mapping definitions.
//!
//! The table is a compile-time `match`: every permission must name its
//! allowed roles, and roles not listed are denied.

use std::fmt;

use serde::{Deserialize, Serialize};

use fams_entity::user::UserRole;

use UserRole::{CourseRep, DepartmentalOfficer, FacultyAdmin, Lecturer};

/// A protected capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    // Asset registry
    /// Browse and look up assets.
    ViewAssets,
    /// Register new assets and upload their images/documents.
    RegisterAssets,
    /// Edit asset details and status.
    UpdateAssets,
    /// Remove assets from the registry.
    DeleteAssets,

    // Requests
    /// Submit asset requests.
    CreateRequests,
    /// See every user's requests.
    ViewAllRequests,
    /// Approve or reject requests.
    ApproveRequests,

    // Transfers
    /// Start a transfer between departments or custodians.
    InitiateTransfers,
    /// Approve or reject transfers.
    ApproveTransfers,

    // Administration
    /// Create, list, and remove users.
    ManageUsers,
    /// Send broadcast notifications.
    SendNotifications,
    /// View registry reports and statistics.
    ViewReports,
}

const ALL_ROLES: &[UserRole] = &[FacultyAdmin, DepartmentalOfficer, Lecturer, CourseRep];
const ADMIN_ONLY: &[UserRole] = &[FacultyAdmin];
const ADMIN_AND_OFFICER: &[UserRole] = &[FacultyAdmin, DepartmentalOfficer];

impl Permission {
    /// Every permission, in declaration order.
    pub const ALL: [Permission; 12] = [
        Self::ViewAssets,
        Self::RegisterAssets,
        Self::UpdateAssets,
        Self::DeleteAssets,
        Self::CreateRequests,
        Self::ViewAllRequests,
        Self::ApproveRequests,
        Self::InitiateTransfers,
        Self::ApproveTransfers,
        Self::ManageUsers,
        Self::SendNotifications,
        Self::ViewReports,
    ];

    /// The roles allowed to exercise this permission. Never empty.
    pub fn allowed_roles(self) -> &'static [UserRole] {
        match self {
            Self::ViewAssets => ALL_ROLES,
            Self::RegisterAssets => ADMIN_AND_OFFICER,
            Self::UpdateAssets => ADMIN_AND_OFFICER,
            Self::DeleteAssets => ADMIN_ONLY,
            Self::CreateRequests => &[DepartmentalOfficer, Lecturer, CourseRep],
            Self::ViewAllRequests => ADMIN_AND_OFFICER,
            Self::ApproveRequests => ADMIN_AND_OFFICER,
            Self::InitiateTransfers => ADMIN_AND_OFFICER,
            Self::ApproveTransfers => ADMIN_ONLY,
            Self::ManageUsers => ADMIN_ONLY,
            Self::SendNotifications => ADMIN_ONLY,
            Self::ViewReports => ADMIN_AND_OFFICER,
        }
    }

    /// Return the permission as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewAssets => "VIEW_ASSETS",
            Self::RegisterAssets => "REGISTER_ASSETS",
            Self::UpdateAssets => "UPDATE_ASSETS",
            Self::DeleteAssets => "DELETE_ASSETS",
            Self::CreateRequests => "CREATE_REQUESTS",
            Self::ViewAllRequests => "VIEW_ALL_REQUESTS",
            Self::ApproveRequests => "APPROVE_REQUESTS",
            Self::InitiateTransfers => "INITIATE_TRANSFERS",
            Self::ApproveTransfers => "APPROVE_TRANSFERS",
            Self::ManageUsers => "MANAGE_USERS",
            Self::SendNotifications => "SEND_NOTIFICATIONS",
            Self::ViewReports => "VIEW_REPORTS",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view over the permission table.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionTable;

impl PermissionTable {
    /// Iterate `(permission, allowed roles)` pairs in declaration order.
    pub fn entries() -> impl Iterator<Item = (Permission, &'static [UserRole])> {
        Permission::ALL.into_iter().map(|p| (p, p.allowed_roles()))
    }

    /// The permissions held by a role, in declaration order.
    pub fn permissions_for_role(role: UserRole) -> Vec<Permission> {
        Self::entries()
            .filter(|(_, roles)| roles.contains(&role))
            .map(|(permission, _)| permission)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_permission_has_at_least_one_role() {
        for (permission, roles) in PermissionTable::entries() {
            assert!(!roles.is_empty(), "{permission} maps to no roles");
        }
    }

    #[test]
    fn test_all_lists_each_permission_once() {
        let mut seen = std::collections::HashSet::new();
        for permission in Permission::ALL {
            assert!(seen.insert(permission), "{permission} listed twice");
        }
    }

    #[test]
    fn test_permissions_for_course_rep() {
        assert_eq!(
            PermissionTable::permissions_for_role(CourseRep),
            vec![Permission::ViewAssets, Permission::CreateRequests]
        );
    }

    #[test]
    fn test_admin_holds_administration_permissions() {
        let perms = PermissionTable::permissions_for_role(FacultyAdmin);
        assert!(perms.contains(&Permission::ManageUsers));
        assert!(perms.contains(&Permission::ApproveTransfers));
        assert!(!perms.contains(&Permission::CreateRequests));
    }
}
