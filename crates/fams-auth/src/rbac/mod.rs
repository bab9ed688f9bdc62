//! Role-based access control: the permission table and its evaluator.

pub mod enforcer;
pub mod policies;

pub use enforcer::{RbacEnforcer, has_all_permissions, has_any_permission, has_permission};
pub use policies::{Permission, PermissionTable};
