use axum::body::Bytes;
use axum::extract::{Path, RawQuery, Request, State};
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use shared_types::SessionToken;

use crate::error_convert::ReqwestErrorExt;
use crate::session::cookies;
use crate::upstream::SchoolApi;

/// Largest request body forwarded through the proxy.
const MAX_PROXY_BODY: usize = 10 * 1024 * 1024;

/// Router forwarding `/proxy/{*path}` to the school API with the session's
/// bearer token attached.
pub fn proxy_router(api: SchoolApi) -> Router {
    Router::new()
        .route("/proxy/{*path}", any(forward))
        .with_state(api)
}

/// Bearer token for a proxied request: the middleware's session first, then
/// the raw cookie or Authorization header.
fn bearer_for(req: &Request) -> Option<String> {
    req.extensions()
        .get::<SessionToken>()
        .map(|s| s.access.clone())
        .or_else(|| cookies::extract_access_token(req.headers()))
}

async fn forward(
    State(api): State<SchoolApi>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    req: Request,
) -> Response {
    let method: Method = req.method().clone();
    let token = bearer_for(&req);
    let content_type = req.headers().get(header::CONTENT_TYPE).cloned();

    let body = match axum::body::to_bytes(req.into_body(), MAX_PROXY_BODY).await {
        Ok(body) => body,
        Err(_) => return (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into_response(),
    };

    let target = match query {
        Some(q) if !q.is_empty() => format!("{}?{}", path, q),
        _ => path,
    };
    tracing::debug!(%method, %target, authenticated = token.is_some(), "Proxying request");

    let mut upstream = api.request(method, &target, token.as_deref());
    if let Some(ct) = content_type {
        upstream = upstream.header(header::CONTENT_TYPE, ct);
    }
    if !body.is_empty() {
        upstream = upstream.body(body);
    }

    match upstream.send().await {
        Ok(resp) => relay(resp).await,
        Err(e) => e.into_app_error().into_response(),
    }
}

/// Copy the upstream status, content type and body onto our response.
async fn relay(resp: reqwest::Response) -> Response {
    let status = resp.status();
    let mut headers = HeaderMap::new();
    if let Some(ct) = resp.headers().get(header::CONTENT_TYPE) {
        headers.insert(header::CONTENT_TYPE, ct.clone());
    }
    let body: Bytes = match resp.bytes().await {
        Ok(body) => body,
        Err(e) => return e.into_app_error().into_response(),
    };
    (status, headers, body).into_response()
}
