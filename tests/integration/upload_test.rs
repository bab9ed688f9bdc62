//! Integration tests for asset uploads.

mod helpers;

use fams_entity::user::UserRole;
use helpers::{MAX_UPLOAD, TestApp};
use http::StatusCode;

#[tokio::test]
async fn test_oversize_upload_is_400_for_every_role() {
    let app = TestApp::new();
    let data = vec![1u8; MAX_UPLOAD + 1];

    for role in UserRole::ALL {
        let token = app.token_for(role);
        let res = app.upload("file", "image/png", &data, Some(&token)).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{role}");
        assert_eq!(res.body["code"], "VALIDATION");
    }
}

#[tokio::test]
async fn test_upload_requires_register_permission() {
    let app = TestApp::new();
    for role in [UserRole::Lecturer, UserRole::CourseRep] {
        let token = app.token_for(role);
        let res = app.upload("file", "image/png", b"png!", Some(&token)).await;
        assert_eq!(res.status, StatusCode::FORBIDDEN, "{role}");
    }
}

#[tokio::test]
async fn test_officer_upload_is_stored() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::DepartmentalOfficer);

    let res = app.upload("file", "image/png", b"png!", Some(&token)).await;
    assert_eq!(res.status, StatusCode::CREATED);

    let data = &res.body["data"];
    assert_eq!(data["content_type"], "image/png");
    assert_eq!(data["size"], 4);
    let url = data["url"].as_str().expect("url");
    assert!(url.starts_with("/uploads/"));

    let file_name = data["file_name"].as_str().expect("file_name");
    assert!(app.upload_dir.join(file_name).exists());

    let served = app.get(url, None).await;
    assert_eq!(served.status, StatusCode::OK);
}

#[tokio::test]
async fn test_disallowed_type_is_400() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::FacultyAdmin);
    let res = app
        .upload("file", "application/x-msdownload", b"MZ", Some(&token))
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_file_field_is_400() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::FacultyAdmin);
    let res = app.upload("attachment", "image/png", b"png!", Some(&token)).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], "No file provided");
}

#[tokio::test]
async fn test_anonymous_upload_is_401() {
    let app = TestApp::new();
    let res = app.upload("file", "image/png", b"png!", None).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}
