use dioxus::prelude::*;
use shared_types::{CreateAttendanceRequest, ValidateRequest};
use shared_ui::{
    use_toast, Button, Card, CardContent, Form, FormError, FormRow, Input, PageHeader,
    PageSubtitle, PageTitle, Textarea, ToastOptions,
};
use std::collections::HashMap;

use crate::feedback::{field_errors, report_failure, report_invalid};
use crate::format_helpers::today_iso;
use crate::routes::notices::SemesterSelect;
use crate::routes::Route;

/// Record a new attendance sheet from lists of present and absent user ids.
#[component]
pub fn TakeAttendancePage(back: Route) -> Element {
    let toast = use_toast();
    let mut subject_id = use_signal(String::new);
    let mut semester = use_signal(|| 1i64);
    let mut date = use_signal(today_iso);
    let mut present = use_signal(String::new);
    let mut absent = use_signal(String::new);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let handle_submit = move |_: FormEvent| {
        let back = back.clone();
        async move {
            let req = CreateAttendanceRequest::from_roster(
                &subject_id(),
                semester(),
                &date(),
                &present(),
                &absent(),
            );
            if let Err(err) = req.validate_request() {
                errors.set(report_invalid(toast, err));
                return;
            }
            errors.set(HashMap::new());
            saving.set(true);
            let marked = req.records.len();
            match server::api::create_attendance(req).await {
                Ok(_) => {
                    toast.success(format!("Attendance saved for {marked} students"), ToastOptions::new());
                    navigator().push(back);
                }
                Err(e) => {
                    errors.set(field_errors(&e));
                    report_failure(toast, "create attendance", &e);
                }
            }
            saving.set(false);
        }
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Take Attendance" }
                PageSubtitle { "Separate user IDs with commas or new lines" }
            }
            Card {
                CardContent {
                    Form { onsubmit: handle_submit,
                        FormRow {
                            Input {
                                label: "Subject ID",
                                required: true,
                                value: subject_id(),
                                on_input: move |e: FormEvent| subject_id.set(e.value()),
                                error: errors.read().get("subject_id").cloned(),
                            }
                            SemesterSelect {
                                label: "Semester",
                                value: semester(),
                                on_change: move |s: i64| semester.set(s),
                                error: errors.read().get("semester").cloned(),
                            }
                            Input {
                                label: "Date",
                                input_type: "date",
                                required: true,
                                value: date(),
                                on_input: move |e: FormEvent| date.set(e.value()),
                                error: errors.read().get("date").cloned(),
                            }
                        }
                        FormRow {
                            Textarea {
                                label: "Present",
                                rows: 4,
                                placeholder: "7, 8, 9",
                                value: present(),
                                on_input: move |e: FormEvent| present.set(e.value()),
                            }
                            Textarea {
                                label: "Absent",
                                rows: 4,
                                value: absent(),
                                on_input: move |e: FormEvent| absent.set(e.value()),
                            }
                        }
                        FormError { message: errors.read().get("records").cloned() }
                        Button { button_type: "submit", loading: saving(), "Save Attendance" }
                    }
                }
            }
        }
    }
}
