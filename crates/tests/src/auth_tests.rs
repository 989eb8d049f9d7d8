use axum::http::Method;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, LoginRequest, UserRole};

use crate::common::{self, MockSchool};

fn login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn login_returns_the_upstream_token_pair() {
    let mock = MockSchool::start().await;
    mock.respond(
        Method::POST,
        "/user/login/",
        200,
        json!({"token": {"access": "a.b.c", "refresh": "r.s.t"}, "msg": "Login Success"}),
    );

    let token = mock
        .api()
        .login(&login_request("asha@school.edu", "hunter22"))
        .await
        .unwrap();

    assert_eq!(token.access, "a.b.c");
    assert_eq!(token.refresh, "r.s.t");
    let sent = mock.last(Method::POST, "/user/login/").json();
    assert_eq!(sent, json!({"email": "asha@school.edu", "password": "hunter22"}));
}

#[tokio::test]
async fn rejected_credentials_read_as_invalid_login() {
    let mock = MockSchool::start().await;
    mock.respond(
        Method::POST,
        "/user/login/",
        404,
        json!({"errors": {"non_field_errors": ["Email or Password is not Valid"]}}),
    );

    let err = mock
        .api()
        .login(&login_request("asha@school.edu", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid email or password");
}

#[tokio::test]
async fn login_without_access_token_is_refused() {
    let mock = MockSchool::start().await;
    mock.respond(
        Method::POST,
        "/user/login/",
        200,
        json!({"token": {"access": "", "refresh": ""}}),
    );

    let err = mock
        .api()
        .login(&login_request("asha@school.edu", "hunter22"))
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn malformed_email_never_reaches_the_school_api() {
    let mock = MockSchool::start().await;

    let err = mock
        .api()
        .login(&login_request("not-an-email", "hunter22"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert!(err.field_errors.contains_key("email"));
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn current_user_takes_role_from_profile() {
    let mock = MockSchool::start().await;
    mock.respond(
        Method::GET,
        "/user/profile/",
        200,
        json!({
            "profile": {
                "id": 12,
                "name": "Mina Shah",
                "email": "mina@school.edu",
                "Photo": "/media/photos/mina.png"
            },
            "role": "teacher"
        }),
    );

    let user = mock.api().current_user(common::TOKEN).await.unwrap();

    assert_eq!(user.id, 12);
    assert_eq!(user.role, UserRole::Teacher);
    assert_eq!(
        user.photo_url,
        Some(format!("{}/media/photos/mina.png", mock.base_url))
    );
    let req = mock.last(Method::GET, "/user/profile/");
    assert_eq!(req.authorization.as_deref(), Some("Bearer access.token.value"));
}

#[tokio::test]
async fn unknown_role_resolves_to_unassigned() {
    let mock = MockSchool::start().await;
    mock.respond(
        Method::GET,
        "/user/profile/",
        200,
        json!({"profile": {"id": 3, "name": "New Hire"}, "role": 9}),
    );

    let user = mock.api().current_user(common::TOKEN).await.unwrap();
    assert_eq!(user.role, UserRole::Unassigned);
}
