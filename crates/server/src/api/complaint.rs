use dioxus::prelude::*;
use shared_types::{Complaint, ComplaintEdit, FileUpload, MessageResponse, PagedList};

#[cfg(feature = "server")]
use super::context::{allow_upload, require_token, ServerResultExt};

#[cfg(feature = "server")]
use crate::upstream::SchoolApi;

/// Every complaint filed in the school (admin).
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_all_complaints() -> Result<Vec<Complaint>, ServerFnError> {
    let token = require_token()?;
    let mut complaints = SchoolApi::global()
        .list_complaints(&token)
        .await
        .into_server_result()?;
    shared_types::sort_newest_first(&mut complaints);
    Ok(complaints)
}

/// One page of the caller's own complaints, newest first.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_my_complaints(page: i64) -> Result<PagedList<Complaint>, ServerFnError> {
    let token = require_token()?;
    let page = shared_types::normalize_page(Some(page));
    SchoolApi::global()
        .my_complaints(&token, page)
        .await
        .into_server_result()
}

#[cfg_attr(feature = "server", tracing::instrument(skip(attachment)))]
#[server]
pub async fn create_complaint(
    req: ComplaintEdit,
    attachment: Option<FileUpload>,
) -> Result<MessageResponse, ServerFnError> {
    let token = require_token()?;
    let attachment = allow_upload(attachment)?;
    SchoolApi::global()
        .create_complaint(&token, &req, attachment.as_ref())
        .await
        .into_server_result()
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn edit_complaint(
    complaint_id: i64,
    req: ComplaintEdit,
) -> Result<MessageResponse, ServerFnError> {
    let token = require_token()?;
    SchoolApi::global()
        .edit_complaint(&token, complaint_id, &req)
        .await
        .into_server_result()
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_complaint(complaint_id: i64) -> Result<MessageResponse, ServerFnError> {
    let token = require_token()?;
    SchoolApi::global()
        .delete_complaint(&token, complaint_id)
        .await
        .into_server_result()
}
