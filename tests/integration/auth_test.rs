//! Integration tests for session lookup, sign-out, and login validation.

mod helpers;

use fams_entity::user::UserRole;
use helpers::TestApp;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_session_from_bearer_token() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::DepartmentalOfficer);

    let res = app.get("/api/auth/session", Some(&token)).await;
    assert_eq!(res.status, StatusCode::OK);

    let data = &res.body["data"];
    assert_eq!(data["role"], "DEPARTMENTAL_OFFICER");
    assert_eq!(data["dashboard"], "/officer");
    let permissions = data["permissions"].as_array().expect("permissions");
    assert!(permissions.contains(&json!("REGISTER_ASSETS")));
    assert!(!permissions.contains(&json!("MANAGE_USERS")));
}

#[tokio::test]
async fn test_session_from_cookie() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::CourseRep);

    let res = app.get_with_cookie("/api/auth/session", &token).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["data"]["role"], "COURSE_REP");
}

#[tokio::test]
async fn test_cookie_session_passes_guard() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::Lecturer);

    let res = app.get_with_cookie("/lecturer", &token).await;
    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn test_invalid_token_has_no_session() {
    let app = TestApp::new();
    let res = app.get("/api/auth/session", Some("garbage.token.value")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body["data"].is_null());
}

fn set_cookie(res: &helpers::TestResponse) -> &str {
    res.headers
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .expect("set-cookie header")
}

#[tokio::test]
async fn test_logout_without_cookie_still_expires_it() {
    let app = TestApp::new();
    let res = app.json("POST", "/api/auth/logout", json!({}), None).await;
    assert_eq!(res.status, StatusCode::OK);

    let cookie = set_cookie(&res);
    assert!(cookie.starts_with(&format!("{}=;", app.config.auth.cookie_name)));
    assert!(cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_logout_clears_session_cookie() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::Lecturer);
    let req = Request::builder()
        .method("POST")
        .uri("/api/auth/logout")
        .header("Cookie", format!("{}={token}", app.config.auth.cookie_name))
        .body(Body::empty())
        .expect("request");

    let res = app.send(req).await;
    assert_eq!(res.status, StatusCode::OK);

    let cookie = set_cookie(&res);
    assert!(cookie.starts_with(&format!("{}=;", app.config.auth.cookie_name)));
    assert!(cookie.contains("Max-Age=0"));
    assert!(cookie.contains("Path=/"));
}

#[tokio::test]
async fn test_login_rejects_malformed_body() {
    let app = TestApp::new();

    let res = app
        .json(
            "POST",
            "/api/auth/login",
            json!({ "email": "not-an-email", "password": "" }),
            None,
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["code"], "VALIDATION");
    assert!(res.body["details"].get("email").is_some());
    assert!(res.body["details"].get("password").is_some());

    let res = app
        .json("POST", "/api/auth/login", json!({ "email": "a@b.c" }), None)
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sign_in_landing_points_at_login() {
    let app = TestApp::new();
    let res = app.get("/auth/signin", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["data"]["login"]["path"], "/api/auth/login");
}
