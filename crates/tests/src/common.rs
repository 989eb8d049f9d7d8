use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::Value;
use server::upstream::SchoolApi;
use shared_types::{ApiConfig, FileUpload};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const TOKEN: &str = "access.token.value";

/// One request as the mock school API saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl Recorded {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body should be JSON")
    }
}

#[derive(Default)]
struct MockState {
    responses: Mutex<HashMap<(Method, String), (u16, Value)>>,
    requests: Mutex<Vec<Recorded>>,
}

/// A stand-in for the school API on an ephemeral local port.
///
/// Responses are scripted per method and path; anything unscripted answers
/// 404 with a `detail` message. Every request is recorded.
pub struct MockSchool {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockSchool {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let app = Router::new().fallback(record_and_reply).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock school API");
        let addr = listener.local_addr().expect("mock address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock school API crashed");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    /// Client pointed at this mock.
    pub fn api(&self) -> SchoolApi {
        SchoolApi::new(&ApiConfig {
            base_url: self.base_url.clone(),
            ..ApiConfig::default()
        })
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: Value) {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert((method, path.to_string()), (status, body));
    }

    /// Number of requests received so far.
    pub fn hits(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Most recent request to `method path`.
    pub fn last(&self, method: Method, path: &str) -> Recorded {
        self.requests()
            .into_iter()
            .rev()
            .find(|r| r.method == method && r.path == path)
            .unwrap_or_else(|| panic!("no {} {} request was made", method, path))
    }
}

async fn record_and_reply(State(state): State<Arc<MockState>>, req: Request) -> Response {
    let (parts, body) = req.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX).await.unwrap_or_default();
    let header_text = |name: header::HeaderName| {
        parts
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().unwrap().push(Recorded {
        method: parts.method.clone(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        authorization: header_text(header::AUTHORIZATION),
        content_type: header_text(header::CONTENT_TYPE),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let scripted = state
        .responses
        .lock()
        .unwrap()
        .get(&(parts.method.clone(), parts.uri.path().to_string()))
        .cloned();

    match scripted {
        Some((status, value)) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(value)).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "detail": "Not found." })),
        )
            .into_response(),
    }
}

/// A small text upload as the browser would hand it over.
pub fn text_upload(name: &str, contents: &str) -> FileUpload {
    FileUpload {
        file_name: name.to_string(),
        content_type: "text/plain".to_string(),
        data_base64: STANDARD.encode(contents),
    }
}

/// A PNG-typed upload with arbitrary bytes.
pub fn png_upload(name: &str, bytes: &[u8]) -> FileUpload {
    FileUpload {
        file_name: name.to_string(),
        content_type: "image/png".to_string(),
        data_base64: STANDARD.encode(bytes),
    }
}

/// Send a request through a router and return status plus body text.
pub async fn send(app: &Router, req: axum::http::Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&body).into_owned())
}
