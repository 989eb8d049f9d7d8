use dioxus::prelude::*;
use shared_types::{ComplaintEdit, FileUpload, ValidateRequest};
use shared_ui::{
    use_toast, Button, Card, CardContent, Form, Input, PageHeader, PageSubtitle, PageTitle,
    Textarea, ToastOptions,
};
use std::collections::HashMap;

use crate::feedback::{field_errors, report_failure, report_invalid};
use crate::routes::Route;
use crate::upload::FilePicker;

/// File a complaint with an optional attachment, then return to `back`.
#[component]
pub fn ComplaintCreatePage(back: Route) -> Element {
    let toast = use_toast();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut suggestion = use_signal(String::new);
    let attachment = use_signal(|| Option::<FileUpload>::None);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let handle_submit = move |_: FormEvent| {
        let back = back.clone();
        async move {
            let req = ComplaintEdit::new(&title(), &description(), &suggestion());
            if let Err(err) = req.validate_request() {
                errors.set(report_invalid(toast, err));
                return;
            }
            errors.set(HashMap::new());
            saving.set(true);
            match server::api::create_complaint(req, attachment()).await {
                Ok(_) => {
                    toast.success("Complaint submitted".to_string(), ToastOptions::new());
                    navigator().push(back);
                }
                Err(e) => {
                    errors.set(field_errors(&e));
                    report_failure(toast, "create complaint", &e);
                }
            }
            saving.set(false);
        }
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "New Complaint" }
                PageSubtitle { "Describe the problem and, if you can, how to fix it" }
            }
            Card {
                CardContent {
                    Form { onsubmit: handle_submit,
                        Input {
                            label: "Title",
                            required: true,
                            value: title(),
                            on_input: move |e: FormEvent| title.set(e.value()),
                            error: errors.read().get("title").cloned(),
                        }
                        Textarea {
                            label: "Description",
                            required: true,
                            value: description(),
                            on_input: move |e: FormEvent| description.set(e.value()),
                            error: errors.read().get("description").cloned(),
                        }
                        Textarea {
                            label: "Suggestion",
                            rows: 2,
                            value: suggestion(),
                            on_input: move |e: FormEvent| suggestion.set(e.value()),
                        }
                        FilePicker {
                            label: "Attachment",
                            accept: "image/*,application/pdf",
                            selected: attachment,
                            disabled: saving(),
                        }
                        if let Some(message) = errors.read().get("file").cloned() {
                            p { class: "field-error", role: "alert", "{message}" }
                        }
                        Button { button_type: "submit", loading: saving(), "Submit Complaint" }
                    }
                }
            }
        }
    }
}
