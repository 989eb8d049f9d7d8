use dioxus::prelude::*;
use shared_types::{CreateAssignmentRequest, FileUpload, ValidateRequest};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, Card, CardContent, DataTableCell, DataTableRow, Form,
    FormRow, Input, PageActions, PageHeader, PageSubtitle, PageTitle, Textarea, ToastOptions,
};
use std::collections::HashMap;

use super::list_table::{ListTable, ListView};
use super::Route;
use crate::feedback::{field_errors, report_failure, report_invalid, use_list};
use crate::format_helpers::{format_date_human, today_iso, truncate};
use crate::search::use_search_query;
use crate::upload::FilePicker;

/// Posted assignments. Sections that may post pass their `create` route.
#[component]
pub fn AssignmentListPage(#[props(default)] create: Option<Route>) -> Element {
    let query = use_search_query();
    let mut assignments = use_list("load assignments", server::api::list_assignments);

    let today = chrono::Local::now().date_naive();
    let rows = assignments.rows.read().filtered(&query.get());
    let view = ListView::of(&*assignments.rows.read(), rows.len());

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Assignments" }
                if let Some(create) = create {
                    PageActions {
                        Button {
                            onclick: move |_| { navigator().push(create.clone()); },
                            "Post Assignment"
                        }
                    }
                }
            }

            ListTable {
                columns: vec!["Title", "Details", "Subject", "Due", "File"],
                view,
                empty: "No assignments posted",
                on_retry: move |_| assignments.reload(),
                for assignment in rows {
                    DataTableRow { key: "{assignment.id}",
                        DataTableCell { "{assignment.title}" }
                        DataTableCell { title: "{assignment.text}", "{truncate(&assignment.text, 80)}" }
                        DataTableCell { "{assignment.subject_id}" }
                        DataTableCell {
                            span { "{format_date_human(&assignment.due_date)}" }
                            if assignment.is_overdue(today) {
                                " "
                                Badge { variant: BadgeVariant::Destructive, "Overdue" }
                            }
                        }
                        DataTableCell {
                            if let Some(url) = assignment.file_url.clone() {
                                a { href: "{url}", target: "_blank", rel: "noopener", "Download" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Post an assignment with an optional brief, then return to `back`.
#[component]
pub fn AssignmentCreatePage(back: Route) -> Element {
    let toast = use_toast();
    let mut title = use_signal(String::new);
    let mut text = use_signal(String::new);
    let mut due_date = use_signal(today_iso);
    let mut subject_id = use_signal(String::new);
    let brief = use_signal(|| Option::<FileUpload>::None);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let handle_submit = move |_: FormEvent| {
        let back = back.clone();
        async move {
            let req = CreateAssignmentRequest::new(&title(), &text(), &due_date(), &subject_id());
            if let Err(err) = req.validate_request() {
                errors.set(report_invalid(toast, err));
                return;
            }
            errors.set(HashMap::new());
            saving.set(true);
            match server::api::create_assignment(req, brief()).await {
                Ok(_) => {
                    toast.success("Assignment posted".to_string(), ToastOptions::new());
                    navigator().push(back);
                }
                Err(e) => {
                    errors.set(field_errors(&e));
                    report_failure(toast, "create assignment", &e);
                }
            }
            saving.set(false);
        }
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Post Assignment" }
                PageSubtitle { "Students of the subject see it on their assignments page" }
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
                            label: "Instructions",
                            rows: 5,
                            value: text(),
                            on_input: move |e: FormEvent| text.set(e.value()),
                        }
                        FormRow {
                            Input {
                                label: "Due date",
                                input_type: "date",
                                required: true,
                                value: due_date(),
                                on_input: move |e: FormEvent| due_date.set(e.value()),
                                error: errors.read().get("due_date").cloned(),
                            }
                            Input {
                                label: "Subject ID",
                                required: true,
                                value: subject_id(),
                                on_input: move |e: FormEvent| subject_id.set(e.value()),
                                error: errors.read().get("subject_id").cloned(),
                            }
                        }
                        FilePicker {
                            label: "Brief",
                            accept: "application/pdf,image/*,text/plain",
                            selected: brief,
                            disabled: saving(),
                        }
                        if let Some(message) = errors.read().get("file").cloned() {
                            p { class: "field-error", role: "alert", "{message}" }
                        }
                        Button { button_type: "submit", loading: saving(), "Post Assignment" }
                    }
                }
            }
        }
    }
}
