//! HTTP client for the remote school API.
//!
//! Every dashboard operation is a thin call through [`SchoolApi`]: attach the
//! caller's bearer token, send JSON or multipart, and map non-success
//! responses into [`AppError`]. Endpoint groups live in the submodules as
//! additional `impl SchoolApi` blocks.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use shared_types::{list_from_value, ApiConfig, AppError, MessageResponse};
use std::sync::OnceLock;
use std::time::Duration;

use crate::error_convert::ReqwestErrorExt;

mod assignment;
mod attendance;
mod auth;
mod complaint;
mod dashboard;
mod notice;
mod qna;
mod role;
mod user;

/// Client for the school API. Cheap to clone.
#[derive(Clone, Debug)]
pub struct SchoolApi {
    http: reqwest::Client,
    base_url: String,
    max_upload_bytes: usize,
}

impl SchoolApi {
    pub fn new(config: &ApiConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Falling back to default HTTP client");
                reqwest::Client::new()
            });
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_upload_bytes: config.max_upload_bytes,
        }
    }

    /// Process-wide client built from the loaded configuration.
    pub fn global() -> &'static SchoolApi {
        static API: OnceLock<SchoolApi> = OnceLock::new();
        API.get_or_init(|| SchoolApi::new(crate::config::api_config()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Absolute URL for a media path returned by the school API.
    pub fn media_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            self.url(path)
        }
    }

    pub(crate) fn media_url_opt(&self, path: Option<String>) -> Option<String> {
        path.filter(|p| !p.trim().is_empty())
            .map(|p| self.media_url(&p))
    }

    pub(crate) fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request, mapping any non-success status into an `AppError`.
    pub(crate) async fn send(&self, req: RequestBuilder) -> Result<reqwest::Response, AppError> {
        let response = req.send().await.map_err(|e| e.into_app_error())?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let path = response.url().path().to_string();
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), %path, "School API rejected request");
        Err(AppError::from_upstream(status.as_u16(), &body))
    }

    pub(crate) async fn json<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, AppError> {
        let bytes = self
            .send(req)
            .await?
            .bytes()
            .await
            .map_err(|e| e.into_app_error())?;
        decode_json(&bytes)
    }

    pub(crate) async fn value(&self, req: RequestBuilder) -> Result<serde_json::Value, AppError> {
        let bytes = self
            .send(req)
            .await?
            .bytes()
            .await
            .map_err(|e| e.into_app_error())?;
        if bytes.is_empty() {
            return Ok(serde_json::Value::Null);
        }
        decode_json(&bytes)
    }

    /// Fetch a list endpoint. Non-list bodies decode as an empty list.
    pub(crate) async fn list<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<Vec<T>, AppError> {
        let value = self.value(req).await?;
        list_from_value(value).map_err(|e| {
            tracing::warn!(error = %e, "Unexpected list shape from school API");
            AppError::upstream("The school API returned an unexpected response")
        })
    }

    /// Send a mutating request whose body is a `{"msg": ...}` acknowledgement
    /// or empty.
    pub(crate) async fn message(&self, req: RequestBuilder) -> Result<MessageResponse, AppError> {
        let value = self.value(req).await?;
        Ok(serde_json::from_value(value).unwrap_or_default())
    }
}

fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    serde_json::from_slice(bytes).map_err(|e| {
        tracing::warn!(error = %e, "Failed to decode school API response");
        AppError::upstream("The school API returned an unexpected response")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn api(base: &str) -> SchoolApi {
        SchoolApi::new(&ApiConfig {
            base_url: base.to_string(),
            ..ApiConfig::default()
        })
    }

    #[test]
    fn url_joins_without_double_slash() {
        let api = api("http://school.test/api/");
        assert_eq!(api.url("/user/list/"), "http://school.test/api/user/list/");
        assert_eq!(api.url("roles/list/complaints/"), "http://school.test/api/roles/list/complaints/");
    }

    #[test]
    fn media_url_keeps_absolute_links() {
        let api = api("http://school.test");
        assert_eq!(api.media_url("/media/a.png"), "http://school.test/media/a.png");
        assert_eq!(api.media_url("https://cdn.test/a.png"), "https://cdn.test/a.png");
        assert_eq!(api.media_url_opt(Some(" ".into())), None);
    }

    #[test]
    fn decode_json_maps_errors_to_upstream() {
        let err = decode_json::<Vec<i64>>(b"<html>").unwrap_err();
        assert_eq!(err.kind, shared_types::AppErrorKind::Upstream);
    }
}
