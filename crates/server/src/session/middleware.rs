use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use shared_types::SessionToken;

use super::cookies::{self, CookieSlot, PendingCookieAction};
use super::token;
use crate::upstream::SchoolApi;

/// What the middleware decided about the incoming session.
enum SessionOutcome {
    /// Usable token pair, with `true` if it was just refreshed.
    Active(SessionToken, bool),
    /// The refresh token was rejected; stale cookies should go.
    Revoked,
    Anonymous,
}

/// Permissive session middleware handling the bearer token and cookies.
///
/// On each request:
/// 1. Reads the access/refresh pair from cookies (or Bearer header fallback)
/// 2. If the access token is missing or expired, refreshes it through the school API
/// 3. Inserts the `SessionToken` and a `CookieSlot` into request extensions
/// 4. After the handler runs, applies refreshed or scheduled cookie changes
///
/// Does NOT reject anonymous requests; server functions decide authorization.
pub async fn session_middleware(
    State(api): State<SchoolApi>,
    mut req: Request,
    next: Next,
) -> Response {
    let outcome = resolve_session(&api, req.headers()).await;

    let cookie_slot = CookieSlot::default();
    req.extensions_mut().insert(cookie_slot.clone());

    let mut refreshed: Option<SessionToken> = None;
    let mut revoked = false;
    match outcome {
        SessionOutcome::Active(session, was_refreshed) => {
            if was_refreshed {
                refreshed = Some(session.clone());
            }
            req.extensions_mut().insert(session);
        }
        SessionOutcome::Revoked => revoked = true,
        SessionOutcome::Anonymous => {}
    }

    let mut response = next.run(req).await;

    if let Some(session) = refreshed {
        cookies::set_session_cookies(response.headers_mut(), &session);
    }
    if revoked {
        cookies::clear_session_cookies(response.headers_mut());
    }

    match cookie_slot.take() {
        Some(PendingCookieAction::Set(session)) => {
            cookies::set_session_cookies(response.headers_mut(), &session);
        }
        Some(PendingCookieAction::Clear) => {
            cookies::clear_session_cookies(response.headers_mut());
        }
        None => {}
    }

    response
}

async fn resolve_session(api: &SchoolApi, headers: &axum::http::HeaderMap) -> SessionOutcome {
    let access = cookies::extract_access_token(headers);
    let refresh = cookies::extract_refresh_token(headers);
    let now = chrono::Utc::now().timestamp();

    let fresh_access = access.filter(|t| !token::is_expired(t, now));
    if let Some(access) = fresh_access {
        return SessionOutcome::Active(
            SessionToken {
                access,
                refresh: refresh.unwrap_or_default(),
            },
            false,
        );
    }

    let Some(refresh) = refresh else {
        return SessionOutcome::Anonymous;
    };

    match api.refresh_session(&refresh).await {
        Ok(session) => {
            tracing::debug!("Access token refreshed transparently");
            SessionOutcome::Active(session, true)
        }
        Err(e) if e.is_unauthorized() => {
            tracing::info!("Refresh token rejected, clearing session cookies");
            SessionOutcome::Revoked
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session refresh failed");
            SessionOutcome::Anonymous
        }
    }
}
