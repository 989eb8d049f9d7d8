use dioxus::prelude::*;
use shared_types::{AuthUser, FeatureFlags};

#[cfg(feature = "server")]
use super::context::ServerResultExt;

#[cfg(feature = "server")]
use crate::upstream::SchoolApi;

/// Feature flags the UI uses to hide disabled sections.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// Login with email and password. Sets HTTP-only session cookies on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    use crate::session::cookies;
    use shared_types::{LoginRequest, UserRole};

    let req = LoginRequest {
        email: email.trim().to_string(),
        password,
    };

    let api = SchoolApi::global();
    let session = api.login(&req).await.into_server_result()?;
    let user = api.current_user(&session.access).await.into_server_result()?;

    if user.role == UserRole::Unassigned {
        tracing::warn!(user_id = user.id, "Logged-in account has no dashboard role");
    }
    tracing::info!(user_id = user.id, role = user.role.as_str(), "User logged in");

    cookies::schedule_session_cookies(&session);
    Ok(user)
}

/// Logout. The school API is told to revoke the refresh token when one is
/// present; cookies are cleared either way.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use crate::session::{cookies, current_session};

    if let Some(session) = current_session() {
        if let Err(e) = SchoolApi::global().logout(&session).await {
            tracing::warn!(error = %e, "Upstream logout failed");
        }
    }

    cookies::schedule_clear_cookies();
    Ok(())
}

/// The signed-in user, or `None` when there is no usable session.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::session::{cookies, current_session};

    let Some(session) = current_session() else {
        return Ok(None);
    };

    match SchoolApi::global().current_user(&session.access).await {
        Ok(user) => Ok(Some(user)),
        Err(e) if e.is_unauthorized() => {
            cookies::schedule_clear_cookies();
            Ok(None)
        }
        Err(e) => Err(e.into_server_fn_error()),
    }
}
