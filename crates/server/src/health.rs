use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Instant;

use crate::upstream::SchoolApi;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub upstream: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// Health check handler. Any HTTP answer from the school API counts as
/// reachable; only transport failures are reported.
pub async fn health_check(State(api): State<SchoolApi>) -> Json<HealthResponse> {
    let upstream = match api.request(reqwest::Method::GET, "/", None).send().await {
        Ok(_) => "reachable".to_string(),
        Err(e) => format!("error: {e}"),
    };

    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    Json(HealthResponse {
        status: "ok".to_string(),
        upstream,
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn health_router(api: SchoolApi) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(api)
}
