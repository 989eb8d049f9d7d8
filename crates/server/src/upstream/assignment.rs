use reqwest::Method;
use shared_types::{
    AppError, Assignment, CreateAssignmentRequest, FileUpload, MessageResponse, ValidateRequest,
};

use super::SchoolApi;
use crate::uploads::build_form;

impl SchoolApi {
    #[tracing::instrument(skip_all)]
    pub async fn list_assignments(&self, token: &str) -> Result<Vec<Assignment>, AppError> {
        let mut assignments: Vec<Assignment> = self
            .list(self.request(Method::GET, "/roles/assignment/listAssignment/", Some(token)))
            .await?;
        for assignment in assignments.iter_mut() {
            assignment.file_url = self.media_url_opt(assignment.file_url.take());
        }
        Ok(assignments)
    }

    #[tracing::instrument(skip_all, fields(title = %req.title, has_file = file.is_some()))]
    pub async fn create_assignment(
        &self,
        token: &str,
        req: &CreateAssignmentRequest,
        file: Option<&FileUpload>,
    ) -> Result<MessageResponse, AppError> {
        req.validate_request()?;
        let form = build_form(
            req.multipart_fields(),
            "assignmentInFile",
            file,
            self.max_upload_bytes(),
        )?;
        self.message(
            self.request(Method::POST, "/roles/assignment/createAssignment/", Some(token))
                .multipart(form),
        )
        .await
    }
}
