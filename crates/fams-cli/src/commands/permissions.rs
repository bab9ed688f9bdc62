//! Prints the role/permission table.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use fams_auth::rbac::{PermissionTable, has_permission};
use fams_core::error::AppError;
use fams_entity::user::UserRole;

/// Arguments for the permissions command
#[derive(Debug, Args)]
pub struct PermissionsArgs {
    /// Only list the permissions held by this role
    #[arg(short, long)]
    pub role: Option<String>,
}

/// One permission and who holds it
#[derive(Debug, Serialize, Tabled)]
struct PermissionRow {
    permission: String,
    #[tabled(rename = "FACULTY_ADMIN")]
    faculty_admin: String,
    #[tabled(rename = "DEPARTMENTAL_OFFICER")]
    departmental_officer: String,
    #[tabled(rename = "LECTURER")]
    lecturer: String,
    #[tabled(rename = "COURSE_REP")]
    course_rep: String,
}

fn mark(role: UserRole, roles: &[UserRole]) -> String {
    if roles.contains(&role) { "yes" } else { "-" }.to_string()
}

fn rows(only: Option<UserRole>) -> Vec<PermissionRow> {
    PermissionTable::entries()
        .filter(|(permission, _)| only.is_none_or(|role| has_permission(role, *permission)))
        .map(|(permission, roles)| PermissionRow {
            permission: permission.to_string(),
            faculty_admin: mark(UserRole::FacultyAdmin, roles),
            departmental_officer: mark(UserRole::DepartmentalOfficer, roles),
            lecturer: mark(UserRole::Lecturer, roles),
            course_rep: mark(UserRole::CourseRep, roles),
        })
        .collect()
}

/// Execute the permissions command
pub fn execute(args: &PermissionsArgs, format: OutputFormat) -> Result<(), AppError> {
    match &args.role {
        Some(role) => {
            let role: UserRole = role.parse()?;
            output::print_list(&rows(Some(role)), format);
            if matches!(format, OutputFormat::Table) {
                output::print_kv("Dashboard", role.dashboard_path());
            }
        }
        None => output::print_list(&rows(None), format),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_row_per_permission() {
        assert_eq!(rows(None).len(), fams_auth::rbac::Permission::ALL.len());
    }

    #[test]
    fn test_role_filter() {
        let rep: Vec<String> = rows(Some(UserRole::CourseRep))
            .into_iter()
            .map(|r| r.permission)
            .collect();
        assert_eq!(rep, vec!["VIEW_ASSETS", "CREATE_REQUESTS"]);
    }

    #[test]
    fn test_rows_reflect_table() {
        let rows = rows(None);
        let manage = rows.iter().find(|r| r.permission == "MANAGE_USERS").unwrap();
        assert_eq!(manage.faculty_admin, "yes");
        assert_eq!(manage.departmental_officer, "-");

        let create = rows.iter().find(|r| r.permission == "CREATE_REQUESTS").unwrap();
        assert_eq!(create.faculty_admin, "-");
        assert_eq!(create.course_rep, "yes");
    }
}
