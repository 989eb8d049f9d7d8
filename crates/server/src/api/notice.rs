use dioxus::prelude::*;
use shared_types::{CreateNoticeRequest, FileUpload, MessageResponse, Notice};

#[cfg(feature = "server")]
use super::context::{allow_upload, require_token, ServerResultExt};

#[cfg(feature = "server")]
use crate::upstream::SchoolApi;

/// Notices posted for one semester.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_notices(semester: i64) -> Result<Vec<Notice>, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use shared_types::{AppError, SEMESTERS};

    if !SEMESTERS.contains(&semester) {
        return Err(AppError::field("semester", "Choose a semester between 1 and 8")
            .into_server_fn_error());
    }
    let token = require_token()?;
    SchoolApi::global()
        .filter_notices(&token, semester)
        .await
        .into_server_result()
}

#[cfg_attr(feature = "server", tracing::instrument(skip(image)))]
#[server]
pub async fn create_notice(
    req: CreateNoticeRequest,
    image: Option<FileUpload>,
) -> Result<MessageResponse, ServerFnError> {
    let token = require_token()?;
    let image = allow_upload(image)?;
    SchoolApi::global()
        .create_notice(&token, &req, image.as_ref())
        .await
        .into_server_result()
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_notice(notice_id: i64) -> Result<MessageResponse, ServerFnError> {
    let token = require_token()?;
    SchoolApi::global()
        .delete_notice(&token, notice_id)
        .await
        .into_server_result()
}
