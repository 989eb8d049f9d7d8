use reqwest::Method;
use shared_types::{
    AppError, AuthUser, LoginRequest, LoginResponse, ProfileResponse, RefreshResponse,
    SessionToken, ValidateRequest,
};

use super::SchoolApi;

impl SchoolApi {
    /// Exchange credentials for a bearer token pair.
    #[tracing::instrument(skip(self, req), fields(email = %req.email))]
    pub async fn login(&self, req: &LoginRequest) -> Result<SessionToken, AppError> {
        req.validate_request()?;

        let resp: LoginResponse = self
            .json(self.request(Method::POST, "/user/login/", None).json(req))
            .await
            .map_err(|e| {
                if e.is_unauthorized() || e.kind == shared_types::AppErrorKind::NotFound {
                    AppError::unauthorized("Invalid email or password")
                } else {
                    e
                }
            })?;

        if resp.token.access.is_empty() {
            return Err(AppError::unauthorized("Invalid email or password"));
        }
        tracing::info!("Login accepted by school API");
        Ok(resp.token)
    }

    /// Trade a refresh token for a new access token.
    #[tracing::instrument(skip_all)]
    pub async fn refresh_session(&self, refresh: &str) -> Result<SessionToken, AppError> {
        let resp: RefreshResponse = self
            .json(
                self.request(Method::POST, "/user/token/refresh/", None)
                    .json(&serde_json::json!({ "refresh": refresh })),
            )
            .await?;
        Ok(SessionToken {
            access: resp.access,
            refresh: resp.refresh.unwrap_or_else(|| refresh.to_string()),
        })
    }

    /// Ask the school API to revoke the refresh token.
    #[tracing::instrument(skip_all)]
    pub async fn logout(&self, token: &SessionToken) -> Result<(), AppError> {
        self.message(
            self.request(Method::POST, "/user/logout/", Some(&token.access))
                .json(&serde_json::json!({ "refresh": token.refresh })),
        )
        .await?;
        Ok(())
    }

    #[tracing::instrument(skip_all)]
    pub async fn profile(&self, token: &str) -> Result<ProfileResponse, AppError> {
        let mut resp: ProfileResponse = self
            .json(self.request(Method::GET, "/user/profile/", Some(token)))
            .await?;
        resp.profile.photo = self.media_url_opt(resp.profile.photo.take());
        Ok(resp)
    }

    /// Resolve the signed-in user and their role from the profile endpoint.
    pub async fn current_user(&self, token: &str) -> Result<AuthUser, AppError> {
        let resp = self.profile(token).await?;
        Ok(AuthUser {
            id: resp.profile.id,
            name: resp.profile.name,
            email: resp.profile.email,
            role: resp.role,
            photo_url: resp.profile.photo,
        })
    }
}
