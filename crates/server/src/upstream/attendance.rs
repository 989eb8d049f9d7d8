use reqwest::Method;
use shared_types::{
    AppError, AttendanceQuery, AttendanceSheet, CreateAttendanceRequest, DeleteAttendanceRequest,
    MessageResponse, UpdateAttendanceRequest, ValidateRequest,
};

use super::SchoolApi;

impl SchoolApi {
    #[tracing::instrument(skip(self, token))]
    pub async fn query_attendance(
        &self,
        token: &str,
        query: &AttendanceQuery,
    ) -> Result<Vec<AttendanceSheet>, AppError> {
        self.list(
            self.request(Method::GET, "/roles/attendance/getdata/", Some(token))
                .query(&query.query_pairs()),
        )
        .await
    }

    #[tracing::instrument(skip(self, token, req), fields(subject = %req.subject_id, marks = req.records.len()))]
    pub async fn create_attendance(
        &self,
        token: &str,
        req: &CreateAttendanceRequest,
    ) -> Result<MessageResponse, AppError> {
        req.validate_request()?;
        self.message(
            self.request(Method::POST, "/roles/attendance/create/", Some(token))
                .json(req),
        )
        .await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn update_attendance(
        &self,
        token: &str,
        record_id: i64,
        req: &UpdateAttendanceRequest,
    ) -> Result<MessageResponse, AppError> {
        self.message(
            self.request(
                Method::PUT,
                &format!("/roles/attendance/editAttendance/{}/", record_id),
                Some(token),
            )
            .json(req),
        )
        .await
    }

    /// Delete one attendance record. The id travels in the request body.
    #[tracing::instrument(skip(self, token))]
    pub async fn delete_attendance(&self, token: &str, record_id: i64) -> Result<MessageResponse, AppError> {
        self.message(
            self.request(Method::DELETE, "/roles/attendance/deleteAttendance/", Some(token))
                .json(&DeleteAttendanceRequest { id: record_id }),
        )
        .await
    }
}
