pub mod cookies;
pub mod middleware;
pub mod token;

use shared_types::{AppError, SessionToken};

/// The caller's session from the current server-function request.
///
/// Checks the `SessionToken` the session middleware placed in extensions
/// first, then falls back to reading the cookies directly.
pub fn current_session() -> Option<SessionToken> {
    let ctx = dioxus::fullstack::FullstackContext::current()?;
    let parts = ctx.parts_mut();

    if let Some(session) = parts.extensions.get::<SessionToken>() {
        return Some(session.clone());
    }

    let access = cookies::extract_access_token(&parts.headers)?;
    Some(SessionToken {
        access,
        refresh: cookies::extract_refresh_token(&parts.headers).unwrap_or_default(),
    })
}

/// Bearer token for the current request or an Unauthorized error.
pub fn require_token() -> Result<String, AppError> {
    current_session()
        .map(|s| s.access)
        .ok_or_else(|| AppError::unauthorized("No access token found. Please log in again."))
}
