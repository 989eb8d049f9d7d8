use reqwest::Method;
use shared_types::{
    flatten_directory, AppError, CreateUserRequest, FileUpload, MessageResponse,
    UpdateProfileRequest, UserGroups, UserSummary, ValidateRequest,
};

use super::SchoolApi;
use crate::uploads::build_form;

impl SchoolApi {
    /// Every teacher and student, teachers first.
    #[tracing::instrument(skip_all)]
    pub async fn list_users(&self, token: &str) -> Result<Vec<UserSummary>, AppError> {
        let groups: Vec<UserGroups> = self
            .list(self.request(Method::GET, "/user/list/", Some(token)))
            .await?;
        Ok(flatten_directory(groups))
    }

    #[tracing::instrument(skip(self, token, req), fields(email = %req.email, role_id = req.role_id))]
    pub async fn create_user(
        &self,
        token: &str,
        req: &CreateUserRequest,
    ) -> Result<MessageResponse, AppError> {
        req.validate_request()?;
        self.message(
            self.request(Method::POST, "/user/register/", Some(token))
                .json(req),
        )
        .await
    }

    #[tracing::instrument(skip_all, fields(has_photo = photo.is_some()))]
    pub async fn update_profile(
        &self,
        token: &str,
        req: &UpdateProfileRequest,
        photo: Option<&FileUpload>,
    ) -> Result<MessageResponse, AppError> {
        let req = req.normalized();
        req.validate_request()?;
        let form = build_form(req.multipart_fields(), "Photo", photo, self.max_upload_bytes())?;
        self.message(
            self.request(Method::PUT, "/user/update/", Some(token))
                .multipart(form),
        )
        .await
    }
}
