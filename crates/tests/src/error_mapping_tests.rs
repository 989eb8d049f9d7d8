use axum::http::Method;
use pretty_assertions::assert_eq;
use serde_json::json;
use server::error_convert::AppErrorExt;
use shared_types::{AppError, AppErrorKind};

use crate::common::{self, MockSchool};

async fn users_error(status: u16, body: serde_json::Value) -> AppError {
    let mock = MockSchool::start().await;
    mock.respond(Method::GET, "/user/list/", status, body);
    mock.api().list_users(common::TOKEN).await.unwrap_err()
}

#[tokio::test]
async fn statuses_map_to_error_kinds() {
    let cases = [
        (401, AppErrorKind::Unauthorized),
        (403, AppErrorKind::Forbidden),
        (404, AppErrorKind::NotFound),
        (409, AppErrorKind::Conflict),
        (429, AppErrorKind::RateLimited),
        (502, AppErrorKind::Upstream),
    ];
    for (status, kind) in cases {
        let err = users_error(status, json!({})).await;
        assert_eq!(err.kind, kind, "status {status}");
    }
}

#[tokio::test]
async fn expired_token_message_is_kept() {
    let err = users_error(
        401,
        json!({"detail": "Given token not valid for any token type", "code": "token_not_valid"}),
    )
    .await;
    assert!(err.is_unauthorized());
    assert_eq!(err.message, "Given token not valid for any token type");
}

#[tokio::test]
async fn bad_request_carries_field_errors() {
    let err = users_error(400, json!({"email": ["user with this email already exists."]})).await;

    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(
        err.field_errors.get("email").map(String::as_str),
        Some("user with this email already exists.")
    );
}

#[tokio::test]
async fn unreachable_school_api_is_an_upstream_error() {
    let api = server::upstream::SchoolApi::new(&shared_types::ApiConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
        ..Default::default()
    });

    let err = api.list_users(common::TOKEN).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Upstream);
}

#[tokio::test]
async fn errors_survive_the_server_function_boundary() {
    let err = users_error(404, json!({"detail": "No such user"})).await;

    let wire = err.clone().into_server_fn_error().to_string();
    let parsed = AppError::from_server_error(&wire).unwrap();
    assert_eq!(parsed, err);
    assert_eq!(AppError::friendly_message(&wire), "No such user");
}
