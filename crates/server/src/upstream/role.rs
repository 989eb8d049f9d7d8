use reqwest::Method;
use shared_types::{
    AppError, MessageResponse, RoleRequest, RoleWithPermissions, ValidateRequest, ROLE_CREATED_MSG,
};

use super::SchoolApi;

impl SchoolApi {
    #[tracing::instrument(skip_all)]
    pub async fn list_roles(&self, token: &str) -> Result<Vec<RoleWithPermissions>, AppError> {
        self.list(self.request(Method::GET, "/roles/list_role_with_permission/", Some(token)))
            .await
    }

    /// Create a role. A success status with an unexpected message is treated
    /// as a rejection carrying that message.
    #[tracing::instrument(skip(self, token, req), fields(role = %req.role))]
    pub async fn create_role(&self, token: &str, req: &RoleRequest) -> Result<MessageResponse, AppError> {
        req.validate_request()?;
        let resp = self
            .message(
                self.request(Method::POST, "/roles/create_role/", Some(token))
                    .json(req),
            )
            .await?;
        if !resp.msg.is_empty() && resp.msg != ROLE_CREATED_MSG {
            return Err(AppError::bad_request(resp.msg));
        }
        Ok(resp)
    }

    #[tracing::instrument(skip(self, token, req), fields(role = %req.role))]
    pub async fn update_role(
        &self,
        token: &str,
        role_id: i64,
        req: &RoleRequest,
    ) -> Result<MessageResponse, AppError> {
        req.validate_request()?;
        self.message(
            self.request(Method::PUT, &format!("/roles/update_role/{}/", role_id), Some(token))
                .json(req),
        )
        .await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn delete_role(&self, token: &str, role_id: i64) -> Result<MessageResponse, AppError> {
        self.message(self.request(
            Method::DELETE,
            &format!("/roles/delete_role/{}/", role_id),
            Some(token),
        ))
        .await
    }
}
