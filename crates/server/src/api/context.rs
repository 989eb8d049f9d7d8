// Server-only helpers shared across the api/* modules.

use dioxus::prelude::ServerFnError;
use shared_types::{AppError, FileUpload};

use crate::error_convert::AppErrorExt;

/// Bearer token for the caller, or an Unauthorized server-function error.
pub(crate) fn require_token() -> Result<String, ServerFnError> {
    crate::session::require_token().map_err(|e| e.into_server_fn_error())
}

/// Reject the request when the community board is switched off.
pub(crate) fn require_community() -> Result<(), ServerFnError> {
    if crate::config::feature_flags().community {
        Ok(())
    } else {
        Err(AppError::forbidden("The Q&A board is disabled").into_server_fn_error())
    }
}

/// Pass an attachment through only when uploads are enabled.
pub(crate) fn allow_upload(file: Option<FileUpload>) -> Result<Option<FileUpload>, ServerFnError> {
    match file {
        Some(_) if !crate::config::feature_flags().uploads => {
            Err(AppError::forbidden("File uploads are disabled").into_server_fn_error())
        }
        other => Ok(other),
    }
}

/// Shorthand for mapping an upstream result into a server-function result.
pub(crate) trait ServerResultExt<T> {
    fn into_server_result(self) -> Result<T, ServerFnError>;
}

impl<T> ServerResultExt<T> for Result<T, AppError> {
    fn into_server_result(self) -> Result<T, ServerFnError> {
        self.map_err(|e| e.into_server_fn_error())
    }
}
