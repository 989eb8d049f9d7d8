use base64::Engine as _;
use dioxus::prelude::*;
use shared_types::{format_limit, AppError, FeatureFlags, FileUpload};
use shared_ui::{use_toast, ToastOptions};

/// Guess a content type from the file extension when the browser gives none.
pub fn mime_from_filename(name: &str) -> String {
    let lower = name.to_lowercase();
    let ext = lower.rsplit('.').next().unwrap_or_default();
    match ext {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
    .to_string()
}

/// Package raw bytes as an upload and run the size/type checks.
pub fn encode_upload(
    name: &str,
    content_type: Option<String>,
    bytes: &[u8],
    max_bytes: usize,
) -> Result<FileUpload, AppError> {
    let upload = FileUpload {
        file_name: name.to_string(),
        content_type: content_type
            .filter(|ct| !ct.trim().is_empty())
            .unwrap_or_else(|| mime_from_filename(name)),
        data_base64: base64::engine::general_purpose::STANDARD.encode(bytes),
    };
    upload.check(max_bytes)?;
    Ok(upload)
}

/// Read the first file of a file-input change event, refusing files over
/// `max_bytes` before their contents are read.
pub async fn read_first_file(evt: &FormEvent, max_bytes: usize) -> Result<Option<FileUpload>, AppError> {
    let files = evt.files();
    let Some(file) = files.first() else {
        return Ok(None);
    };
    if file.size() as usize > max_bytes {
        return Err(AppError::field(
            "file",
            format!("File is larger than {}", format_limit(max_bytes)),
        ));
    }
    let name = file.name();
    let bytes = file
        .read_bytes()
        .await
        .map_err(|_| AppError::field("file", "Failed to read file"))?;
    encode_upload(&name, file.content_type(), &bytes, max_bytes).map(Some)
}

/// File input that reads the chosen file into `selected`. Hidden entirely
/// when uploads are switched off.
#[component]
pub fn FilePicker(
    label: String,
    #[props(default)] accept: String,
    selected: Signal<Option<FileUpload>>,
    #[props(default = false)] disabled: bool,
) -> Element {
    let mut selected = selected;
    let flags: FeatureFlags = use_context();
    let toast = use_toast();
    let mut reading = use_signal(|| false);

    if !flags.uploads {
        return rsx! {};
    }

    let chosen = selected.read().as_ref().map(|f| f.file_name.clone());
    let max_bytes = flags.max_upload_bytes;

    rsx! {
        div { class: "file-picker",
            label { class: "input-label", "{label}" }
            input {
                r#type: "file",
                class: "file-picker-input",
                accept: accept,
                disabled: disabled || reading(),
                onchange: move |evt: FormEvent| async move {
                    reading.set(true);
                    match read_first_file(&evt, max_bytes).await {
                        Ok(file) => selected.set(file),
                        Err(err) => {
                            selected.set(None);
                            toast.error(err.message, ToastOptions::new());
                        }
                    }
                    reading.set(false);
                },
            }
            if let Some(name) = chosen {
                span { class: "file-picker-name", "{name}" }
            }
        }
    }
}
