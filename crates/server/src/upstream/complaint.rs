use reqwest::Method;
use shared_types::{
    has_next_page, list_from_value, sort_newest_first, AppError, Complaint, ComplaintEdit,
    FileUpload, MessageResponse, PagedList, ValidateRequest,
};

use super::SchoolApi;
use crate::uploads::build_form;

impl SchoolApi {
    fn absolute_attachments(&self, complaints: &mut [Complaint]) {
        for complaint in complaints.iter_mut() {
            complaint.attachment_url = self.media_url_opt(complaint.attachment_url.take());
        }
    }

    /// Every complaint in the school (admin view).
    #[tracing::instrument(skip_all)]
    pub async fn list_complaints(&self, token: &str) -> Result<Vec<Complaint>, AppError> {
        let mut complaints: Vec<Complaint> = self
            .list(self.request(Method::GET, "/roles/list/complaints/", Some(token)))
            .await?;
        self.absolute_attachments(&mut complaints);
        Ok(complaints)
    }

    /// One page of the caller's own complaints, newest first.
    #[tracing::instrument(skip(self, token))]
    pub async fn my_complaints(&self, token: &str, page: i64) -> Result<PagedList<Complaint>, AppError> {
        let value = self
            .value(
                self.request(Method::GET, "/roles/complaints/mine/", Some(token))
                    .query(&[("page", page)]),
            )
            .await?;
        let has_next = has_next_page(&value);
        let mut complaints: Vec<Complaint> = list_from_value(value)
            .map_err(|_| AppError::upstream("The school API returned an unexpected response"))?;
        sort_newest_first(&mut complaints);
        self.absolute_attachments(&mut complaints);
        Ok(PagedList::new(complaints, page, has_next))
    }

    #[tracing::instrument(skip_all, fields(title = %req.title, has_file = attachment.is_some()))]
    pub async fn create_complaint(
        &self,
        token: &str,
        req: &ComplaintEdit,
        attachment: Option<&FileUpload>,
    ) -> Result<MessageResponse, AppError> {
        req.validate_request()?;
        let form = build_form(req.multipart_fields(), "file", attachment, self.max_upload_bytes())?;
        self.message(
            self.request(Method::POST, "/roles/complaints/create/", Some(token))
                .multipart(form),
        )
        .await
    }

    #[tracing::instrument(skip(self, token, req))]
    pub async fn edit_complaint(
        &self,
        token: &str,
        complaint_id: i64,
        req: &ComplaintEdit,
    ) -> Result<MessageResponse, AppError> {
        req.validate_request()?;
        self.message(
            self.request(
                Method::PUT,
                &format!("/roles/complaints/edit/{}/", complaint_id),
                Some(token),
            )
            .json(req),
        )
        .await
    }

    #[tracing::instrument(skip(self, token))]
    pub async fn delete_complaint(&self, token: &str, complaint_id: i64) -> Result<MessageResponse, AppError> {
        self.message(self.request(
            Method::DELETE,
            &format!("/roles/complaints/delete/{}/", complaint_id),
            Some(token),
        ))
        .await
    }
}
