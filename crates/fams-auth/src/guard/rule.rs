//! A single protected-prefix rule.

use serde::Serialize;

use fams_entity::user::UserRole;

/// Segment-aware prefix test: `/admin` matches `/admin` and `/admin/users`
/// but not `/administrator`.
pub fn path_has_prefix(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return true;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// A path prefix and the roles allowed beneath it.
///
/// `FacultyAdmin` satisfies every rule regardless of `allowed_roles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRule {
    prefix: String,
    allowed_roles: Vec<UserRole>,
}

impl RouteRule {
    /// Creates a rule for `prefix`.
    pub fn new(prefix: impl Into<String>, allowed_roles: &[UserRole]) -> Self {
        Self {
            prefix: prefix.into(),
            allowed_roles: allowed_roles.to_vec(),
        }
    }

    /// The protected prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The roles listed for this prefix (the admin escalation is implicit).
    pub fn allowed_roles(&self) -> &[UserRole] {
        &self.allowed_roles
    }

    /// Whether the rule applies to `path`.
    pub fn matches(&self, path: &str) -> bool {
        path_has_prefix(path, &self.prefix)
    }

    /// Whether `role` may enter paths under this prefix.
    pub fn permits(&self, role: UserRole) -> bool {
        role.is_admin() || self.allowed_roles.contains(&role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_is_segment_aware() {
        assert!(path_has_prefix("/admin", "/admin"));
        assert!(path_has_prefix("/admin/", "/admin"));
        assert!(path_has_prefix("/admin/users/1", "/admin"));
        assert!(!path_has_prefix("/administrator", "/admin"));
        assert!(!path_has_prefix("/", "/admin"));
        assert!(path_has_prefix("/api/auth/login", "/api/auth/"));
    }

    #[test]
    fn test_admin_escalation() {
        let rule = RouteRule::new("/lecturer", &[UserRole::Lecturer]);
        assert!(rule.permits(UserRole::FacultyAdmin));
        assert!(rule.permits(UserRole::Lecturer));
        assert!(!rule.permits(UserRole::CourseRep));
        assert!(!rule.permits(UserRole::DepartmentalOfficer));
    }
}
