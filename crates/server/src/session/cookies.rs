use axum::http::{header, HeaderMap, HeaderValue};
use cookie::Cookie;
use shared_types::SessionToken;
use std::sync::{Arc, Mutex};

pub const SCHOOL_ACCESS: &str = "school_access";
pub const SCHOOL_REFRESH: &str = "school_refresh";

const ACCESS_MAX_AGE_MINUTES: i64 = 60;
const REFRESH_MAX_AGE_DAYS: i64 = 7;

fn cookie_secure() -> bool {
    std::env::var("COOKIE_SECURE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(false)
}

fn cookie_domain() -> Option<String> {
    std::env::var("COOKIE_DOMAIN")
        .ok()
        .filter(|d| !d.is_empty())
}

/// Build a Set-Cookie header value. `None` if the value contains characters
/// a header cannot carry.
fn build_cookie(name: &'static str, value: &str, max_age: cookie::time::Duration) -> Option<HeaderValue> {
    let mut cookie = Cookie::build((name, value))
        .http_only(true)
        .same_site(cookie::SameSite::Lax)
        .path("/")
        .max_age(max_age)
        .secure(cookie_secure());

    if let Some(domain) = cookie_domain() {
        cookie = cookie.domain(domain);
    }

    HeaderValue::from_str(&cookie.build().to_string()).ok()
}

pub fn build_access_cookie(token: &str) -> Option<HeaderValue> {
    build_cookie(
        SCHOOL_ACCESS,
        token,
        cookie::time::Duration::minutes(ACCESS_MAX_AGE_MINUTES),
    )
}

pub fn build_refresh_cookie(token: &str) -> Option<HeaderValue> {
    build_cookie(
        SCHOOL_REFRESH,
        token,
        cookie::time::Duration::days(REFRESH_MAX_AGE_DAYS),
    )
}

/// Extract the access token from cookies (preferred) or Bearer header (fallback).
pub fn extract_access_token(headers: &HeaderMap) -> Option<String> {
    if let Some(token) = extract_cookie(headers, SCHOOL_ACCESS) {
        return Some(token);
    }

    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

pub fn extract_refresh_token(headers: &HeaderMap) -> Option<String> {
    extract_cookie(headers, SCHOOL_REFRESH)
}

/// Parse a specific cookie value from the Cookie header.
fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|s| s.split(';'))
        .filter_map(|piece| Cookie::parse(piece.trim().to_string()).ok())
        .find(|c| c.name() == name && !c.value().is_empty())
        .map(|c| c.value().to_string())
}

/// Set both session cookies on the response.
pub fn set_session_cookies(headers: &mut HeaderMap, token: &SessionToken) {
    if let Some(access) = build_access_cookie(&token.access) {
        headers.append(header::SET_COOKIE, access);
    }
    if !token.refresh.is_empty() {
        if let Some(refresh) = build_refresh_cookie(&token.refresh) {
            headers.append(header::SET_COOKIE, refresh);
        }
    }
}

/// Clear both session cookies on the response.
pub fn clear_session_cookies(headers: &mut HeaderMap) {
    for name in [SCHOOL_ACCESS, SCHOOL_REFRESH] {
        if let Some(value) = build_cookie(name, "", cookie::time::Duration::ZERO) {
            headers.append(header::SET_COOKIE, value);
        }
    }
}

/// Pending cookie action to be picked up by the session middleware.
#[derive(Clone, Debug)]
pub enum PendingCookieAction {
    Set(SessionToken),
    Clear,
}

/// Shared slot for server functions to communicate cookie actions to the middleware.
#[derive(Clone, Debug, Default)]
pub struct CookieSlot(pub Arc<Mutex<Option<PendingCookieAction>>>);

impl CookieSlot {
    pub fn schedule(&self, action: PendingCookieAction) {
        if let Ok(mut slot) = self.0.lock() {
            *slot = Some(action);
        }
    }

    pub fn take(&self) -> Option<PendingCookieAction> {
        self.0.lock().ok().and_then(|mut slot| slot.take())
    }
}

fn schedule(action: PendingCookieAction) {
    if let Some(ctx) = dioxus::fullstack::FullstackContext::current() {
        let parts = ctx.parts_mut();
        if let Some(slot) = parts.extensions.get::<CookieSlot>() {
            slot.schedule(action);
        }
    }
}

/// Schedule session cookies to be set by the middleware.
/// Called from server functions.
pub fn schedule_session_cookies(token: &SessionToken) {
    schedule(PendingCookieAction::Set(token.clone()));
}

/// Schedule session cookies to be cleared by the middleware.
pub fn schedule_clear_cookies() {
    schedule(PendingCookieAction::Clear);
}
