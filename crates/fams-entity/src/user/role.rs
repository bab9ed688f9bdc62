//! User role enumeration.
//!
//! The role set is closed: every `match` over [`UserRole`] is exhaustive, so
//! adding a role forces every dashboard mapping and policy to be revisited.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the RBAC system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Faculty-wide administrator; implicitly allowed on every guarded area.
    FacultyAdmin,
    /// Departmental officer managing a department's assets.
    DepartmentalOfficer,
    /// Academic staff member.
    Lecturer,
    /// Student course representative.
    CourseRep,
}

impl UserRole {
    /// Every role, in privilege order (highest first).
    pub const ALL: [UserRole; 4] = [
        Self::FacultyAdmin,
        Self::DepartmentalOfficer,
        Self::Lecturer,
        Self::CourseRep,
    ];

    /// Check if this role is the faculty administrator.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::FacultyAdmin)
    }

    /// Path of the role's home dashboard.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Self::FacultyAdmin => "/admin",
            Self::DepartmentalOfficer => "/officer",
            Self::Lecturer => "/lecturer",
            Self::CourseRep => "/course-rep",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FacultyAdmin => "Faculty Admin",
            Self::DepartmentalOfficer => "Departmental Officer",
            Self::Lecturer => "Lecturer",
            Self::CourseRep => "Course Rep",
        }
    }

    /// Return the role as its wire/database string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FacultyAdmin => "FACULTY_ADMIN",
            Self::DepartmentalOfficer => "DEPARTMENTAL_OFFICER",
            Self::Lecturer => "LECTURER",
            Self::CourseRep => "COURSE_REP",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = fams_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "FACULTY_ADMIN" | "ADMIN" => Ok(Self::FacultyAdmin),
            "DEPARTMENTAL_OFFICER" | "OFFICER" => Ok(Self::DepartmentalOfficer),
            "LECTURER" => Ok(Self::Lecturer),
            "COURSE_REP" => Ok(Self::CourseRep),
            _ => Err(fams_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: FACULTY_ADMIN, \
                 DEPARTMENTAL_OFFICER, LECTURER, COURSE_REP"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "FACULTY_ADMIN".parse::<UserRole>().unwrap(),
            UserRole::FacultyAdmin
        );
        assert_eq!("course-rep".parse::<UserRole>().unwrap(), UserRole::CourseRep);
        assert_eq!(
            "Departmental Officer".parse::<UserRole>().unwrap(),
            UserRole::DepartmentalOfficer
        );
        assert!("dean".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_round_trips_through_as_str() {
        for role in UserRole::ALL {
            assert_eq!(role.as_str().parse::<UserRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_dashboard_paths_are_distinct() {
        let mut paths: Vec<_> = UserRole::ALL.iter().map(|r| r.dashboard_path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), UserRole::ALL.len());
    }

    #[test]
    fn test_serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&UserRole::CourseRep).unwrap();
        assert_eq!(json, "\"COURSE_REP\"");
    }
}
