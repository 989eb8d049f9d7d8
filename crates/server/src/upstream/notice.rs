use reqwest::Method;
use shared_types::{
    AppError, CreateNoticeRequest, FileUpload, MessageResponse, Notice, ValidateRequest,
};

use super::SchoolApi;
use crate::uploads::build_form;

impl SchoolApi {
    /// Notices posted for one semester.
    #[tracing::instrument(skip(self, token))]
    pub async fn filter_notices(&self, token: &str, semester: i64) -> Result<Vec<Notice>, AppError> {
        let mut notices: Vec<Notice> = self
            .list(
                self.request(Method::GET, "/roles/community/filter_notice/", Some(token))
                    .query(&[("faculty_batch_sem_id", semester)]),
            )
            .await?;
        for notice in notices.iter_mut() {
            notice.image_url = self.media_url_opt(notice.image_url.take());
        }
        Ok(notices)
    }

    #[tracing::instrument(skip_all, fields(semester = req.semester, has_image = image.is_some()))]
    pub async fn create_notice(
        &self,
        token: &str,
        req: &CreateNoticeRequest,
        image: Option<&FileUpload>,
    ) -> Result<MessageResponse, AppError> {
        req.validate_request()?;
        let form = build_form(req.multipart_fields(), "ImageFile", image, self.max_upload_bytes())?;
        self.message(
            self.request(Method::POST, "/roles/community/create_notice/", Some(token))
                .multipart(form),
        )
        .await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn delete_notice(&self, token: &str, notice_id: i64) -> Result<MessageResponse, AppError> {
        self.message(self.request(
            Method::DELETE,
            &format!("/roles/community/delete_notice/{}/", notice_id),
            Some(token),
        ))
        .await
    }
}
