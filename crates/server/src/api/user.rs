use dioxus::prelude::*;
use shared_types::{
    CreateUserRequest, FileUpload, MessageResponse, ProfileResponse, UpdateProfileRequest,
    UserSummary,
};

#[cfg(feature = "server")]
use super::context::{allow_upload, require_token, ServerResultExt};

#[cfg(feature = "server")]
use crate::upstream::SchoolApi;

/// Profile of the signed-in teacher or student.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_profile() -> Result<ProfileResponse, ServerFnError> {
    let token = require_token()?;
    SchoolApi::global().profile(&token).await.into_server_result()
}

/// Update the signed-in user's profile, optionally replacing the photo.
#[cfg_attr(feature = "server", tracing::instrument(skip(photo)))]
#[server]
pub async fn update_profile(
    req: UpdateProfileRequest,
    photo: Option<FileUpload>,
) -> Result<MessageResponse, ServerFnError> {
    let token = require_token()?;
    let photo = allow_upload(photo)?;
    SchoolApi::global()
        .update_profile(&token, &req, photo.as_ref())
        .await
        .into_server_result()
}

/// Directory of teachers and students (admin).
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_users() -> Result<Vec<UserSummary>, ServerFnError> {
    let token = require_token()?;
    SchoolApi::global().list_users(&token).await.into_server_result()
}

/// Register a new teacher or student account (admin).
#[cfg_attr(feature = "server", tracing::instrument(skip(req), fields(email = %req.email)))]
#[server]
pub async fn create_user(req: CreateUserRequest) -> Result<MessageResponse, ServerFnError> {
    let token = require_token()?;
    let created = SchoolApi::global()
        .create_user(&token, &req)
        .await
        .into_server_result()?;
    tracing::info!(role_id = req.role_id, "User account created");
    Ok(created)
}
