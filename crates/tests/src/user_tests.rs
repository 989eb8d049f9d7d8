use axum::http::Method;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, CreateUserRequest, UpdateProfileRequest, UserRole};

use crate::common::{self, MockSchool};

#[tokio::test]
async fn directory_lists_teachers_before_students() {
    let mock = MockSchool::start().await;
    mock.respond(
        Method::GET,
        "/user/list/",
        200,
        json!([
            {
                "teacher": [{"id": 4, "name": "Mina", "email": "mina@school.edu"}],
                "student": [
                    {"id": 7, "name": "Ravi", "email": "ravi@school.edu"},
                    {"id": 8, "name": "Tara", "email": "tara@school.edu"}
                ]
            }
        ]),
    );

    let users = mock.api().list_users(common::TOKEN).await.unwrap();

    let names: Vec<(&str, UserRole)> = users.iter().map(|u| (u.name.as_str(), u.role())).collect();
    assert_eq!(
        names,
        vec![
            ("Mina", UserRole::Teacher),
            ("Ravi", UserRole::Student),
            ("Tara", UserRole::Student),
        ]
    );
}

#[tokio::test]
async fn create_user_posts_role_id() {
    let mock = MockSchool::start().await;
    mock.respond(Method::POST, "/user/register/", 201, json!({"msg": "Registration Successful"}));

    let req = CreateUserRequest::new(" Ravi Kumar ", "ravi@school.edu", "longpassword", UserRole::Student);
    let resp = mock.api().create_user(common::TOKEN, &req).await.unwrap();

    assert_eq!(resp.msg, "Registration Successful");
    let sent = mock.last(Method::POST, "/user/register/").json();
    assert_eq!(sent["name"], "Ravi Kumar");
    assert_eq!(sent["role_id"], 3);
}

#[tokio::test]
async fn short_password_is_rejected_locally() {
    let mock = MockSchool::start().await;

    let req = CreateUserRequest::new("Ravi", "ravi@school.edu", "short", UserRole::Student);
    let err = mock.api().create_user(common::TOKEN, &req).await.unwrap_err();

    assert_eq!(
        err.field_errors.get("password").map(String::as_str),
        Some("Password must be at least 8 characters")
    );
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn profile_update_sends_multipart_with_photo() {
    let mock = MockSchool::start().await;
    mock.respond(Method::PUT, "/user/update/", 200, json!({"msg": "Profile updated"}));

    let req = UpdateProfileRequest {
        address: "12 Lake Road".into(),
        phone_no: "9800000000".into(),
        father_name: "Hari".into(),
        mother_name: "Sita".into(),
        parents_phone_no: "9811111111".into(),
        dob: "2004-05-06".into(),
    };
    let photo = common::png_upload("me.png", b"\x89PNG fake");
    mock.api()
        .update_profile(common::TOKEN, &req, Some(&photo))
        .await
        .unwrap();

    let sent = mock.last(Method::PUT, "/user/update/");
    assert!(sent
        .content_type
        .as_deref()
        .unwrap_or_default()
        .starts_with("multipart/form-data"));
    assert!(sent.body.contains("name=\"Father_name\""));
    assert!(sent.body.contains("name=\"DOB\""));
    assert!(sent.body.contains("name=\"Photo\"; filename=\"me.png\""));
}

#[tokio::test]
async fn oversized_photo_is_refused_before_upload() {
    let mock = MockSchool::start().await;
    let api = shared_types::ApiConfig {
        base_url: mock.base_url.clone(),
        max_upload_bytes: 4,
        ..Default::default()
    };
    let api = server::upstream::SchoolApi::new(&api);

    let req = UpdateProfileRequest {
        address: "12 Lake Road".into(),
        phone_no: "9800000000".into(),
        ..Default::default()
    };
    let photo = common::png_upload("big.png", b"more than four bytes");
    let err = api
        .update_profile(common::TOKEN, &req, Some(&photo))
        .await
        .unwrap_err();

    assert!(err.field_errors.contains_key("file"));
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn blank_profile_fields_never_reach_the_school_api() {
    let mock = MockSchool::start().await;

    let req = UpdateProfileRequest {
        address: "   ".into(),
        phone_no: "       ".into(),
        ..Default::default()
    };
    let err = mock
        .api()
        .update_profile(common::TOKEN, &req, None)
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("address"));
    assert!(err.field_errors.contains_key("phone_no"));
    assert_eq!(mock.hits(), 0);
}
