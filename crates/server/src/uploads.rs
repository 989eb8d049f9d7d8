use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::multipart::{Form, Part};
use shared_types::{AppError, FileUpload};

/// Decode a browser upload into a multipart part, enforcing size and type limits.
pub fn file_part(upload: &FileUpload, max_bytes: usize) -> Result<Part, AppError> {
    upload.check(max_bytes)?;
    let bytes = STANDARD
        .decode(upload.data_base64.trim())
        .map_err(|_| AppError::field("file", "The selected file could not be read"))?;
    Part::bytes(bytes)
        .file_name(upload.file_name.clone())
        .mime_str(&upload.content_type)
        .map_err(|_| AppError::field("file", "Unsupported file type"))
}

/// Build a multipart form from text fields and an optional file under `file_field`.
pub fn build_form(
    fields: Vec<(&'static str, String)>,
    file_field: &'static str,
    upload: Option<&FileUpload>,
    max_bytes: usize,
) -> Result<Form, AppError> {
    let mut form = fields
        .into_iter()
        .fold(Form::new(), |form, (name, value)| form.text(name, value));
    if let Some(upload) = upload {
        form = form.part(file_field, file_part(upload, max_bytes)?);
    }
    Ok(form)
}
