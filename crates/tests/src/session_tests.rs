use axum::body::Body;
use axum::extract::Request;
use axum::http::{header, Method, StatusCode};
use axum::routing::get;
use axum::Router;
use pretty_assertions::assert_eq;
use serde_json::json;
use server::session::middleware::session_middleware;
use server::upstream::SchoolApi;
use shared_types::SessionToken;
use tower::ServiceExt;

use crate::common::MockSchool;

/// Echoes the access token the middleware attached, or `anonymous`.
async fn whoami(req: Request) -> String {
    req.extensions()
        .get::<SessionToken>()
        .map(|s| s.access.clone())
        .unwrap_or_else(|| "anonymous".to_string())
}

fn app(api: SchoolApi) -> Router {
    Router::new()
        .route("/whoami", get(whoami))
        .layer(axum::middleware::from_fn_with_state(api, session_middleware))
}

async fn call(app: Router, cookie: Option<&str>) -> (StatusCode, Vec<String>, String) {
    let mut req = Request::get("/whoami");
    if let Some(cookie) = cookie {
        req = req.header(header::COOKIE, cookie);
    }
    let response = app.oneshot(req.body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let set_cookies = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, set_cookies, String::from_utf8_lossy(&body).into_owned())
}

#[tokio::test]
async fn live_access_cookie_passes_straight_through() {
    let mock = MockSchool::start().await;

    let (status, set_cookies, body) = call(
        app(mock.api()),
        Some("school_access=opaque.access; school_refresh=r1"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "opaque.access");
    assert!(set_cookies.is_empty());
    assert_eq!(mock.hits(), 0);
}

#[tokio::test]
async fn missing_access_token_is_refreshed() {
    let mock = MockSchool::start().await;
    mock.respond(
        Method::POST,
        "/user/token/refresh/",
        200,
        json!({"access": "fresh.access"}),
    );

    let (_, set_cookies, body) = call(app(mock.api()), Some("school_refresh=r1")).await;

    assert_eq!(body, "fresh.access");
    assert_eq!(
        mock.last(Method::POST, "/user/token/refresh/").json(),
        json!({"refresh": "r1"})
    );
    assert!(set_cookies.iter().any(|c| c.starts_with("school_access=fresh.access")));
    assert!(set_cookies.iter().any(|c| c.starts_with("school_refresh=r1")));
}

#[tokio::test]
async fn rejected_refresh_clears_the_session() {
    let mock = MockSchool::start().await;
    mock.respond(
        Method::POST,
        "/user/token/refresh/",
        401,
        json!({"detail": "Token is blacklisted", "code": "token_not_valid"}),
    );

    let (status, set_cookies, body) = call(app(mock.api()), Some("school_refresh=old")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "anonymous");
    assert_eq!(set_cookies.len(), 2);
    assert!(set_cookies.iter().any(|c| c.starts_with("school_access=;")));
    assert!(set_cookies.iter().any(|c| c.starts_with("school_refresh=;")));
}

#[tokio::test]
async fn no_cookies_means_anonymous() {
    let mock = MockSchool::start().await;

    let (_, set_cookies, body) = call(app(mock.api()), None).await;

    assert_eq!(body, "anonymous");
    assert!(set_cookies.is_empty());
    assert_eq!(mock.hits(), 0);
}
