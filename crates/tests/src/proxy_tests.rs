use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use server::health::health_router;
use server::proxy::proxy_router;

use crate::common::{self, MockSchool};

#[tokio::test]
async fn forwards_with_the_session_cookie_as_bearer() {
    let mock = MockSchool::start().await;
    mock.respond(
        Method::GET,
        "/roles/community/filter_notice/",
        200,
        json!([{"id": 1, "noticeName": "Exam week"}]),
    );
    let app = proxy_router(mock.api());

    let req = Request::get("/proxy/roles/community/filter_notice/?faculty_batch_sem_id=3")
        .header(header::COOKIE, format!("theme=dark; school_access={}", common::TOKEN))
        .body(Body::empty())
        .unwrap();
    let (status, body) = common::send(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    let relayed: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(relayed[0]["noticeName"], "Exam week");

    let seen = mock.last(Method::GET, "/roles/community/filter_notice/");
    assert_eq!(seen.query.as_deref(), Some("faculty_batch_sem_id=3"));
    assert_eq!(
        seen.authorization.as_deref(),
        Some("Bearer access.token.value")
    );
}

#[tokio::test]
async fn forwards_bearer_header_and_body() {
    let mock = MockSchool::start().await;
    mock.respond(
        Method::PUT,
        "/roles/attendance/editAttendance/5/",
        200,
        json!({"msg": "Attendance updated"}),
    );
    let app = proxy_router(mock.api());

    let req = Request::put("/proxy/roles/attendance/editAttendance/5/")
        .header(header::AUTHORIZATION, "Bearer header.token")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"status":"False","date":"2024-03-01"}"#))
        .unwrap();
    let (status, _) = common::send(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    let seen = mock.last(Method::PUT, "/roles/attendance/editAttendance/5/");
    assert_eq!(seen.authorization.as_deref(), Some("Bearer header.token"));
    assert_eq!(seen.content_type.as_deref(), Some("application/json"));
    assert_eq!(seen.json(), json!({"status": "False", "date": "2024-03-01"}));
}

#[tokio::test]
async fn anonymous_requests_go_without_authorization() {
    let mock = MockSchool::start().await;
    mock.respond(Method::GET, "/community/getdata/", 200, json!([]));
    let app = proxy_router(mock.api());

    let req = Request::get("/proxy/community/getdata/")
        .body(Body::empty())
        .unwrap();
    let (status, body) = common::send(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
    let seen = mock.last(Method::GET, "/community/getdata/");
    assert_eq!(seen.authorization, None);
    assert_eq!(seen.query, None);
}

#[tokio::test]
async fn upstream_errors_are_relayed_unchanged() {
    let mock = MockSchool::start().await;
    mock.respond(
        Method::DELETE,
        "/roles/delete_role/9/",
        403,
        json!({"detail": "You do not have permission to perform this action."}),
    );
    let app = proxy_router(mock.api());

    let req = Request::delete("/proxy/roles/delete_role/9/")
        .header(header::COOKIE, format!("school_access={}", common::TOKEN))
        .body(Body::empty())
        .unwrap();
    let (status, body) = common::send(&app, req).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    let relayed: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        relayed["detail"],
        "You do not have permission to perform this action."
    );
}

#[tokio::test]
async fn health_reports_reachable_upstream() {
    let mock = MockSchool::start().await;
    let app = health_router(mock.api());

    let req = Request::get("/health").body(Body::empty()).unwrap();
    let (status, body) = common::send(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    let health: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["upstream"], "reachable");
    assert!(health["version"].is_string());
    assert_eq!(mock.hits(), 1);
}
