//! Dashboard pages and the sign-in landing.
//!
//! Role homes return a navigation document rather than HTML; the entries a
//! viewer sees come straight from the permission table.

use axum::Json;
use axum::response::Redirect;
use serde_json::{Value, json};

use fams_auth::rbac::{Permission, has_permission};
use fams_auth::session::Session;
use fams_core::error::AppError;
use fams_entity::user::UserRole;

use crate::dto::response::{ApiResponse, DashboardResponse, NavItem, SessionResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;

const NAVIGATION: &[(Permission, &str, &str)] = &[
    (Permission::ViewAssets, "Asset registry", "/api/assets"),
    (Permission::RegisterAssets, "Register asset", "/api/assets"),
    (Permission::CreateRequests, "Request an asset", "/api/requests"),
    (Permission::ViewAllRequests, "All requests", "/api/requests"),
    (Permission::ApproveRequests, "Pending requests", "/api/requests?status=PENDING"),
    (Permission::InitiateTransfers, "Transfers", "/api/transfers"),
    (Permission::ApproveTransfers, "Pending transfers", "/api/transfers?status=PENDING"),
    (Permission::ViewReports, "Reports", "/api/assets/summary"),
    (Permission::ManageUsers, "Users", "/api/users"),
    (Permission::SendNotifications, "Broadcast", "/api/notifications/broadcast"),
];

/// GET `routes.dashboard_path`: sends each role to its own home.
pub async fn dashboard(auth: AuthUser) -> Redirect {
    Redirect::to(auth.role.dashboard_path())
}

/// GET /admin
pub async fn admin_home(auth: AuthUser) -> Json<ApiResponse<DashboardResponse>> {
    role_home(UserRole::FacultyAdmin, &auth)
}

/// GET /officer
pub async fn officer_home(auth: AuthUser) -> Json<ApiResponse<DashboardResponse>> {
    role_home(UserRole::DepartmentalOfficer, &auth)
}

/// GET /lecturer
pub async fn lecturer_home(auth: AuthUser) -> Json<ApiResponse<DashboardResponse>> {
    role_home(UserRole::Lecturer, &auth)
}

/// GET /course-rep
pub async fn course_rep_home(auth: AuthUser) -> Json<ApiResponse<DashboardResponse>> {
    role_home(UserRole::CourseRep, &auth)
}

fn role_home(area: UserRole, auth: &AuthUser) -> Json<ApiResponse<DashboardResponse>> {
    let sections = NAVIGATION
        .iter()
        .filter(|(permission, _, _)| has_permission(auth.role, *permission))
        .map(|(permission, label, href)| NavItem {
            label: (*label).to_string(),
            href: (*href).to_string(),
            permission: *permission,
        })
        .collect();

    let viewer = SessionResponse::from(Session {
        user_id: auth.user_id,
        role: auth.role,
        name: auth.name.clone(),
        email: auth.email.clone(),
    });

    Json(ApiResponse::ok(DashboardResponse {
        area,
        title: format!("{} dashboard", area.label()),
        viewer,
        sections,
    }))
}

/// GET `routes.sign_in_path`
pub async fn sign_in() -> Json<ApiResponse<Value>> {
    Json(ApiResponse::ok(json!({
        "message": "Sign in to continue",
        "login": { "method": "POST", "path": "/api/auth/login" },
        "session": "/api/auth/session",
    })))
}

/// Fallback for unknown paths.
pub async fn not_found() -> ApiError {
    AppError::not_found("Route not found").into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fams_service::context::RequestContext;
    use uuid::Uuid;

    fn viewer(role: UserRole) -> AuthUser {
        AuthUser(RequestContext::new(
            Uuid::new_v4(),
            role,
            "Viewer".to_string(),
            "viewer@faculty.example".to_string(),
        ))
    }

    #[test]
    fn test_sections_match_permissions() {
        for role in UserRole::ALL {
            let Json(page) = role_home(role, &viewer(role));
            for item in &page.data.sections {
                assert!(has_permission(role, item.permission), "{role}: {}", item.label);
            }
        }
    }

    #[test]
    fn test_admin_sees_administration() {
        let Json(page) = role_home(UserRole::Lecturer, &viewer(UserRole::FacultyAdmin));
        assert_eq!(page.data.area, UserRole::Lecturer);
        assert!(page.data.sections.iter().any(|s| s.permission == Permission::ManageUsers));
        assert!(!page.data.sections.iter().any(|s| s.permission == Permission::CreateRequests));
    }
}
