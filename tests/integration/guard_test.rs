//! Integration tests for the route guard.

mod helpers;

use fams_core::config::RoutesConfig;
use fams_entity::user::UserRole;
use helpers::TestApp;
use http::StatusCode;

#[tokio::test]
async fn test_unauthenticated_page_redirects_to_sign_in() {
    let app = TestApp::new();
    for path in ["/admin", "/officer", "/lecturer", "/course-rep", "/dashboard"] {
        let res = app.get(path, None).await;
        assert_eq!(res.status, StatusCode::SEE_OTHER, "{path}");
        assert_eq!(res.location(), Some("/auth/signin"), "{path}");
    }
}

#[tokio::test]
async fn test_unauthenticated_api_is_401_json() {
    let app = TestApp::new();
    let res = app.get("/api/assets", None).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body["code"], "UNAUTHORIZED");
    assert!(res.location().is_none());
}

#[tokio::test]
async fn test_wrong_role_redirects_to_dashboard() {
    let app = TestApp::new();
    let rep = app.token_for(UserRole::CourseRep);

    for path in ["/admin", "/officer", "/lecturer", "/lecturer/x"] {
        let res = app.get(path, Some(&rep)).await;
        assert_eq!(res.status, StatusCode::SEE_OTHER, "{path}");
        assert_eq!(res.location(), Some("/dashboard"), "{path}");
    }
}

#[tokio::test]
async fn test_admin_enters_every_area() {
    let app = TestApp::new();
    let admin = app.token_for(UserRole::FacultyAdmin);

    for path in ["/admin", "/officer", "/lecturer", "/course-rep"] {
        let res = app.get(path, Some(&admin)).await;
        assert_eq!(res.status, StatusCode::OK, "{path}");
        assert_eq!(res.body["data"]["viewer"]["role"], "FACULTY_ADMIN");
    }
}

#[tokio::test]
async fn test_each_role_reaches_its_home() {
    let app = TestApp::new();
    for role in UserRole::ALL {
        let token = app.token_for(role);
        let res = app.get(role.dashboard_path(), Some(&token)).await;
        assert_eq!(res.status, StatusCode::OK, "{role}");
        assert_eq!(res.body["data"]["area"], role.as_str());
    }
}

#[tokio::test]
async fn test_dashboard_sends_role_home() {
    let app = TestApp::new();
    for role in UserRole::ALL {
        let token = app.token_for(role);
        let res = app.get("/dashboard", Some(&token)).await;
        assert_eq!(res.status, StatusCode::SEE_OTHER, "{role}");
        assert_eq!(res.location(), Some(role.dashboard_path()));
    }
}

#[tokio::test]
async fn test_dashboard_sections_follow_permissions() {
    let app = TestApp::new();
    let lecturer = app.token_for(UserRole::Lecturer);
    let res = app.get("/lecturer", Some(&lecturer)).await;
    assert_eq!(res.status, StatusCode::OK);

    let permissions: Vec<&str> = res.body["data"]["sections"]
        .as_array()
        .expect("sections")
        .iter()
        .filter_map(|s| s["permission"].as_str())
        .collect();
    assert_eq!(permissions, vec!["VIEW_ASSETS", "CREATE_REQUESTS"]);
}

#[tokio::test]
async fn test_auth_endpoints_bypass_guard() {
    let app = TestApp::new();

    let res = app.get("/api/auth/session", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body["data"].is_null());

    let res = app
        .json("POST", "/api/auth/logout", serde_json::json!({}), None)
        .await;
    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn test_unlisted_paths_are_not_guarded() {
    let app = TestApp::new();

    let res = app.get("/health", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "ok");

    let res = app.get("/auth/signin", None).await;
    assert_eq!(res.status, StatusCode::OK);

    let res = app.get("/nowhere", None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_configured_paths_are_mounted_and_used() {
    let app = TestApp::with_routes(RoutesConfig {
        sign_in_path: "/login".to_string(),
        dashboard_path: "/home".to_string(),
        ..RoutesConfig::default()
    });

    let res = app.get("/admin", None).await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), Some("/login"));

    let res = app.get("/login", None).await;
    assert_eq!(res.status, StatusCode::OK);
    let res = app.get("/auth/signin", None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let rep = app.token_for(UserRole::CourseRep);
    let res = app.get("/admin", Some(&rep)).await;
    assert_eq!(res.location(), Some("/home"));

    let res = app.get("/home", Some(&rep)).await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), Some(UserRole::CourseRep.dashboard_path()));

    let res = app.get("/home", None).await;
    assert_eq!(res.location(), Some("/login"));
}

#[tokio::test]
async fn test_unknown_path_under_protected_prefix_is_guarded() {
    let app = TestApp::new();
    let res = app.get("/admin/settings", None).await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), Some("/auth/signin"));

    let admin = app.token_for(UserRole::FacultyAdmin);
    let res = app.get("/admin/settings", Some(&admin)).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_prefix_match_is_segment_aware() {
    let app = TestApp::new();
    let res = app.get("/administrator", None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_forged_token_is_no_session() {
    let app = TestApp::new();
    let res = app.get("/admin", Some("not-a-real-token")).await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), Some("/auth/signin"));
}

#[tokio::test]
async fn test_permission_denied_on_api_is_403() {
    let app = TestApp::new();
    let rep = app.token_for(UserRole::CourseRep);
    let res = app
        .json(
            "POST",
            "/api/notifications/broadcast",
            serde_json::json!({ "role": "LECTURER", "title": "Hello", "message": "World" }),
            Some(&rep),
        )
        .await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
    assert_eq!(res.body["code"], "FORBIDDEN");
}
