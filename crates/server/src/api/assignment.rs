use dioxus::prelude::*;
use shared_types::{Assignment, CreateAssignmentRequest, FileUpload, MessageResponse};

#[cfg(feature = "server")]
use super::context::{allow_upload, require_token, ServerResultExt};

#[cfg(feature = "server")]
use crate::upstream::SchoolApi;

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_assignments() -> Result<Vec<Assignment>, ServerFnError> {
    let token = require_token()?;
    SchoolApi::global()
        .list_assignments(&token)
        .await
        .into_server_result()
}

/// Post an assignment with an optional attached brief.
#[cfg_attr(feature = "server", tracing::instrument(skip(file)))]
#[server]
pub async fn create_assignment(
    req: CreateAssignmentRequest,
    file: Option<FileUpload>,
) -> Result<MessageResponse, ServerFnError> {
    let token = require_token()?;
    let file = allow_upload(file)?;
    SchoolApi::global()
        .create_assignment(&token, &req, file.as_ref())
        .await
        .into_server_result()
}
