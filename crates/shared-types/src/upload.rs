use serde::{Deserialize, Serialize};

use crate::AppError;

/// Content types accepted for attachments.
pub const ALLOWED_UPLOAD_TYPES: &[&str] = &[
    "image/png",
    "image/jpeg",
    "image/gif",
    "image/webp",
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];

/// A file picked in the browser, carried across the server-function
/// boundary as base64.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub data_base64: String,
}

impl FileUpload {
    /// Decoded size in bytes, computed from the base64 length.
    pub fn decoded_len(&self) -> usize {
        let data = self.data_base64.trim_end();
        let padding = data.chars().rev().take_while(|c| *c == '=').count();
        (data.len() / 4 * 3).saturating_sub(padding)
    }

    /// Reject empty, oversized, or disallowed files.
    pub fn check(&self, max_bytes: usize) -> Result<(), AppError> {
        if self.file_name.trim().is_empty() || self.data_base64.is_empty() {
            return Err(AppError::field("file", "The selected file is empty"));
        }
        if !ALLOWED_UPLOAD_TYPES.contains(&self.content_type.as_str()) {
            return Err(AppError::field(
                "file",
                format!("Files of type {} are not accepted", self.content_type),
            ));
        }
        if self.decoded_len() > max_bytes {
            return Err(AppError::field(
                "file",
                format!("File is larger than {}", format_limit(max_bytes)),
            ));
        }
        Ok(())
    }
}

/// Human-readable size limit for error messages.
pub fn format_limit(bytes: usize) -> String {
    const MB: usize = 1024 * 1024;
    if bytes >= MB && bytes % MB == 0 {
        format!("{} MB", bytes / MB)
    } else if bytes >= 1024 {
        format!("{} KB", bytes / 1024)
    } else {
        format!("{} bytes", bytes)
    }
}
