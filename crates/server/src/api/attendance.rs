use dioxus::prelude::*;
use shared_types::{
    AttendanceQuery, AttendanceSheet, AttendanceStatus, CreateAttendanceRequest, MessageResponse,
};

#[cfg(feature = "server")]
use super::context::{require_token, ServerResultExt};

#[cfg(feature = "server")]
use crate::upstream::SchoolApi;

/// Attendance sheets matching the query. An empty query lists everything
/// the caller may see.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn query_attendance(query: AttendanceQuery) -> Result<Vec<AttendanceSheet>, ServerFnError> {
    let token = require_token()?;
    SchoolApi::global()
        .query_attendance(&token, &query)
        .await
        .into_server_result()
}

/// Record a new attendance sheet (teacher).
#[cfg_attr(feature = "server", tracing::instrument(skip(req), fields(subject = %req.subject_id, marks = req.records.len())))]
#[server]
pub async fn create_attendance(req: CreateAttendanceRequest) -> Result<MessageResponse, ServerFnError> {
    let token = require_token()?;
    SchoolApi::global()
        .create_attendance(&token, &req)
        .await
        .into_server_result()
}

/// Flip one record between present and absent. Returns the stored status.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn toggle_attendance(
    record_id: i64,
    current: AttendanceStatus,
    date: String,
) -> Result<AttendanceStatus, ServerFnError> {
    use shared_types::UpdateAttendanceRequest;

    let token = require_token()?;
    let next = current.toggled();
    SchoolApi::global()
        .update_attendance(&token, record_id, &UpdateAttendanceRequest { status: next, date })
        .await
        .into_server_result()?;
    Ok(next)
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_attendance(record_id: i64) -> Result<MessageResponse, ServerFnError> {
    let token = require_token()?;
    SchoolApi::global()
        .delete_attendance(&token, record_id)
        .await
        .into_server_result()
}
