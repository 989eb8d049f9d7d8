use dioxus::prelude::*;
use shared_types::{MessageResponse, RoleRequest, RoleWithPermissions};

#[cfg(feature = "server")]
use super::context::{require_token, ServerResultExt};

#[cfg(feature = "server")]
use crate::upstream::SchoolApi;

/// Roles with their granted permissions.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_roles() -> Result<Vec<RoleWithPermissions>, ServerFnError> {
    let token = require_token()?;
    SchoolApi::global().list_roles(&token).await.into_server_result()
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn create_role(req: RoleRequest) -> Result<MessageResponse, ServerFnError> {
    let token = require_token()?;
    SchoolApi::global()
        .create_role(&token, &req)
        .await
        .into_server_result()
}

/// Rename a role and replace its permission grants.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn update_role(role_id: i64, req: RoleRequest) -> Result<MessageResponse, ServerFnError> {
    let token = require_token()?;
    SchoolApi::global()
        .update_role(&token, role_id, &req)
        .await
        .into_server_result()
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_role(role_id: i64) -> Result<MessageResponse, ServerFnError> {
    let token = require_token()?;
    SchoolApi::global()
        .delete_role(&token, role_id)
        .await
        .into_server_result()
}
