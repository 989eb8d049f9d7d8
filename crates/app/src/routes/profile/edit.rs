use dioxus::prelude::*;
use shared_types::{FileUpload, UpdateProfileRequest, ValidateRequest};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, ErrorState, Form, FormRow, Input,
    PageHeader, PageTitle, Skeleton, Textarea, ToastOptions,
};
use std::collections::HashMap;

use super::use_profile;
use crate::feedback::{field_errors, report_failure, report_invalid};
use crate::routes::Route;
use crate::upload::FilePicker;

/// Edit the signed-in user's contact details and photo.
#[component]
pub fn EditProfilePage(back: Route) -> Element {
    let mut profile = use_profile();

    let page = match &*profile.read() {
        None => rsx! {
            div { class: "container",
                PageHeader { PageTitle { "Edit Profile" } }
                Skeleton { class: "profile-skeleton" }
            }
        },
        Some(Err(message)) => rsx! {
            div { class: "container",
                PageHeader { PageTitle { "Edit Profile" } }
                ErrorState {
                    message: message.clone(),
                    on_retry: move |_| profile.restart(),
                }
            }
        },
        Some(Ok(data)) => rsx! {
            ProfileForm { initial: UpdateProfileRequest::from_profile(&data.profile), back }
        },
    };
    page
}

#[component]
fn ProfileForm(initial: UpdateProfileRequest, back: Route) -> Element {
    let toast = use_toast();
    let mut draft = use_signal(move || initial.clone());
    let photo = use_signal(|| Option::<FileUpload>::None);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let handle_submit = {
        let back = back.clone();
        move |_: FormEvent| {
            let back = back.clone();
            async move {
                let req = draft.read().normalized();
                if let Err(err) = req.validate_request() {
                    errors.set(report_invalid(toast, err));
                    return;
                }
                errors.set(HashMap::new());
                saving.set(true);
                match server::api::update_profile(req, photo()).await {
                    Ok(_) => {
                        toast.success("Profile updated".to_string(), ToastOptions::new());
                        navigator().push(back);
                    }
                    Err(e) => {
                        errors.set(field_errors(&e));
                        report_failure(toast, "update profile", &e);
                    }
                }
                saving.set(false);
            }
        }
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Edit Profile" }
            }
            Card {
                CardContent {
                    Form { onsubmit: handle_submit,
                        Textarea {
                            label: "Address",
                            required: true,
                            rows: 2,
                            value: draft.read().address.clone(),
                            on_input: move |e: FormEvent| draft.write().address = e.value(),
                            error: errors.read().get("address").cloned(),
                        }
                        FormRow {
                            Input {
                                label: "Phone",
                                input_type: "tel",
                                required: true,
                                value: draft.read().phone_no.clone(),
                                on_input: move |e: FormEvent| draft.write().phone_no = e.value(),
                                error: errors.read().get("phone_no").cloned(),
                            }
                            Input {
                                label: "Date of birth",
                                input_type: "date",
                                value: draft.read().dob.clone(),
                                on_input: move |e: FormEvent| draft.write().dob = e.value(),
                                error: errors.read().get("dob").cloned(),
                            }
                        }
                        FormRow {
                            Input {
                                label: "Father's name",
                                value: draft.read().father_name.clone(),
                                on_input: move |e: FormEvent| draft.write().father_name = e.value(),
                            }
                            Input {
                                label: "Mother's name",
                                value: draft.read().mother_name.clone(),
                                on_input: move |e: FormEvent| draft.write().mother_name = e.value(),
                            }
                            Input {
                                label: "Parents' phone",
                                input_type: "tel",
                                value: draft.read().parents_phone_no.clone(),
                                on_input: move |e: FormEvent| draft.write().parents_phone_no = e.value(),
                                error: errors.read().get("parents_phone_no").cloned(),
                            }
                        }
                        FilePicker { label: "Photo", accept: "image/*", selected: photo, disabled: saving() }
                        if let Some(message) = errors.read().get("file").cloned() {
                            p { class: "field-error", role: "alert", "{message}" }
                        }
                        div { class: "inline-editor-actions",
                            Button { button_type: "submit", loading: saving(), "Save Profile" }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| { navigator().push(back.clone()); },
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }
    }
}
