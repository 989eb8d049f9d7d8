use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Conflict,
    Unauthorized,
    Forbidden,
    RateLimited,
    Upstream,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::RateLimited => write!(f, "RateLimited"),
            AppErrorKind::Upstream => write!(f, "Upstream"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured application error used across server and client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

/// Keys the school API uses for a human-readable message, in priority order.
const MESSAGE_KEYS: &[&str] = &["msg", "message", "detail", "error"];

impl AppError {
    fn with_kind(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::BadRequest, message)
    }

    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::RateLimited, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    /// Validation failure on a single form field.
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut field_errors = HashMap::new();
        field_errors.insert(field.to_string(), message.clone());
        Self::validation(message, field_errors)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Conflict, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Forbidden, message)
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::Upstream, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_kind(AppErrorKind::InternalError, message)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == AppErrorKind::Unauthorized
    }

    /// Map a non-success response from the school API into an `AppError`.
    ///
    /// The body is inspected for a message (`msg`, `message`, `detail`,
    /// `error`) and, for 400/422 responses, for per-field error lists shaped
    /// like `{"email": ["This field is required."]}`.
    pub fn from_upstream(status: u16, body: &str) -> Self {
        let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
        let message = parsed.as_ref().and_then(extract_message);

        match status {
            400 | 422 => {
                let field_errors = parsed.as_ref().map(extract_field_errors).unwrap_or_default();
                let message = message.unwrap_or_else(|| match field_errors.values().next() {
                    Some(first) => first.clone(),
                    None => "The request was rejected by the school API.".to_string(),
                });
                Self::validation(message, field_errors)
            }
            401 => Self::unauthorized(
                message.unwrap_or_else(|| "Invalid token. Please log in again.".to_string()),
            ),
            403 => Self::forbidden(
                message.unwrap_or_else(|| "You do not have permission to do that.".to_string()),
            ),
            404 => Self::not_found(message.unwrap_or_else(|| "Record not found.".to_string())),
            409 => Self::conflict(message.unwrap_or_else(|| "Record already exists.".to_string())),
            429 => Self::rate_limited(
                message.unwrap_or_else(|| "Too many requests. Please slow down.".to_string()),
            ),
            _ => Self::upstream(message.unwrap_or_else(|| {
                format!("The school API responded with status {}.", status)
            })),
        }
    }

    /// Parse an AppError from a ServerFnError message string (client-side).
    ///
    /// `ServerFnError::to_string()` wraps the payload like:
    ///   `error running server function: {"kind":"Unauthorized",...} (details: None)`
    /// This method extracts the embedded JSON and parses it.
    pub fn from_server_error(error_message: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(error_message) {
            return Some(err);
        }
        let start = error_message.find('{')?;
        let end = error_message.rfind('}')?;
        if end > start {
            serde_json::from_str(&error_message[start..=end]).ok()
        } else {
            None
        }
    }

    /// Extract per-field validation errors from a `ServerFnError.to_string()`.
    pub fn parse_field_errors(error_string: &str) -> HashMap<String, String> {
        Self::from_server_error(error_string)
            .map(|e| e.field_errors)
            .unwrap_or_default()
    }

    /// Extract a user-friendly error message from a `ServerFnError.to_string()`.
    ///
    /// Falls back to a generic message if parsing fails.
    pub fn friendly_message(error_string: &str) -> String {
        if let Some(app_error) = Self::from_server_error(error_string) {
            app_error.message
        } else {
            "Something went wrong. Please try again.".to_string()
        }
    }

    #[cfg_attr(not(feature = "server"), allow(dead_code))]
    fn status_code_u16(&self) -> u16 {
        match self.kind {
            AppErrorKind::NotFound => 404,
            AppErrorKind::BadRequest => 400,
            AppErrorKind::ValidationError => 422,
            AppErrorKind::Conflict => 409,
            AppErrorKind::Unauthorized => 401,
            AppErrorKind::Forbidden => 403,
            AppErrorKind::RateLimited => 429,
            AppErrorKind::Upstream => 502,
            AppErrorKind::InternalError => 500,
        }
    }
}

fn extract_message(value: &serde_json::Value) -> Option<String> {
    let obj = value.as_object()?;
    MESSAGE_KEYS.iter().find_map(|key| match obj.get(*key)? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => items.first()?.as_str().map(str::to_string),
        _ => None,
    })
}

fn extract_field_errors(value: &serde_json::Value) -> HashMap<String, String> {
    let Some(obj) = value.as_object() else {
        return HashMap::new();
    };
    obj.iter()
        .filter(|(key, _)| !MESSAGE_KEYS.contains(&key.as_str()))
        .filter_map(|(key, errs)| {
            let first = match errs {
                serde_json::Value::Array(items) => items.first()?.as_str()?.to_string(),
                serde_json::Value::String(s) => s.clone(),
                _ => return None,
            };
            Some((key.clone(), first))
        })
        .collect()
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Please fix the highlighted fields.", field_errors)
    }
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.status_code_u16())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        (status, axum::Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_server_error_parses_wrapped_json() {
        let wrapped = r#"error running server function: {"kind":"NotFound","message":"Role not found"} (details: None)"#;
        let err = AppError::from_server_error(wrapped).unwrap();
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "Role not found");
    }

    #[test]
    fn from_server_error_returns_none_for_garbage() {
        assert!(AppError::from_server_error("not json at all").is_none());
        assert!(AppError::from_server_error("").is_none());
    }

    #[test]
    fn friendly_message_fallback_for_unparseable() {
        assert_eq!(
            AppError::friendly_message("garbage input"),
            "Something went wrong. Please try again."
        );
    }

    #[test]
    fn upstream_401_is_unauthorized_with_default_text() {
        let err = AppError::from_upstream(401, "");
        assert!(err.is_unauthorized());
        assert_eq!(err.message, "Invalid token. Please log in again.");
    }

    #[test]
    fn upstream_message_keys_are_preferred() {
        let err = AppError::from_upstream(404, r#"{"detail":"No complaint with that id"}"#);
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "No complaint with that id");

        let err = AppError::from_upstream(403, r#"{"msg":"Admins only"}"#);
        assert_eq!(err.kind, AppErrorKind::Forbidden);
        assert_eq!(err.message, "Admins only");
    }

    #[test]
    fn upstream_400_collects_field_errors() {
        let body = r#"{"email":["user with this email already exists."],"phone_no":"Too long"}"#;
        let err = AppError::from_upstream(400, body);
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(
            err.field_errors.get("email").map(String::as_str),
            Some("user with this email already exists.")
        );
        assert_eq!(err.field_errors.get("phone_no").map(String::as_str), Some("Too long"));
        assert!(!err.message.is_empty());
    }

    #[test]
    fn upstream_5xx_maps_to_upstream_kind() {
        let err = AppError::from_upstream(503, "<html>bad gateway</html>");
        assert_eq!(err.kind, AppErrorKind::Upstream);
        assert_eq!(err.message, "The school API responded with status 503.");
        assert_eq!(err.status_code_u16(), 502);
    }

    #[test]
    fn field_constructor_sets_single_field() {
        let err = AppError::field("role", "Role name is required");
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert_eq!(err.field_errors.len(), 1);
        assert_eq!(err.field_errors["role"], "Role name is required");
    }

    #[test]
    fn display_impl_formats_correctly() {
        let err = AppError::unauthorized("No access token found. Please log in again.");
        assert_eq!(
            format!("{}", err),
            "Unauthorized: No access token found. Please log in again."
        );
    }
}
