use dioxus::prelude::*;
use shared_types::{semester_label, CreateNoticeRequest, FileUpload, Notice, ValidateRequest, SEMESTERS};
use shared_ui::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader, CardTitle,
    ConfirmDelete, DataTableCell, DataTableRow, Form, FormRow, FormSelect, Input, PageHeader,
    PageTitle, ToastOptions,
};
use std::collections::HashMap;

use super::list_table::{ListTable, ListView};
use crate::feedback::{field_errors, report_failure, report_invalid, use_list};
use crate::search::use_search_query;
use crate::upload::FilePicker;

/// Semester picker over 1..=8.
#[component]
pub fn SemesterSelect(
    label: &'static str,
    value: i64,
    on_change: EventHandler<i64>,
    #[props(default)] error: Option<String>,
) -> Element {
    rsx! {
        FormSelect {
            label,
            value: value.to_string(),
            error,
            onchange: move |e: FormEvent| {
                if let Ok(semester) = e.value().parse::<i64>() {
                    on_change.call(semester);
                }
            },
            for semester in SEMESTERS {
                option {
                    key: "{semester}",
                    value: "{semester}",
                    selected: semester == value,
                    "{semester_label(semester)}"
                }
            }
        }
    }
}

/// Admin form for posting a notice to one semester.
#[component]
fn NoticeForm(on_created: EventHandler<i64>) -> Element {
    let toast = use_toast();
    let mut name = use_signal(String::new);
    let mut semester = use_signal(|| 1i64);
    let mut image = use_signal(|| Option::<FileUpload>::None);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let handle_submit = move |_: FormEvent| async move {
        let req = CreateNoticeRequest::new(&name(), semester());
        if let Err(err) = req.validate_request() {
            errors.set(report_invalid(toast, err));
            return;
        }
        errors.set(HashMap::new());
        saving.set(true);
        let posted_to = req.semester;
        match server::api::create_notice(req, image()).await {
            Ok(_) => {
                toast.success("Notice posted".to_string(), ToastOptions::new());
                name.set(String::new());
                image.set(None);
                on_created.call(posted_to);
            }
            Err(e) => {
                errors.set(field_errors(&e));
                report_failure(toast, "create notice", &e);
            }
        }
        saving.set(false);
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Post a notice" }
            }
            CardContent {
                Form { onsubmit: handle_submit,
                    FormRow {
                        Input {
                            label: "Title",
                            required: true,
                            value: name(),
                            on_input: move |e: FormEvent| name.set(e.value()),
                            error: errors.read().get("name").cloned(),
                        }
                        SemesterSelect {
                            label: "Semester",
                            value: semester(),
                            on_change: move |s: i64| semester.set(s),
                            error: errors.read().get("semester").cloned(),
                        }
                    }
                    FilePicker { label: "Image", accept: "image/*", selected: image, disabled: saving() }
                    Button { button_type: "submit", loading: saving(), "Post Notice" }
                }
            }
        }
    }
}

/// Notices for a chosen semester. Admins can also post and delete.
#[component]
pub fn NoticeBoardPage(#[props(default = false)] can_manage: bool) -> Element {
    let toast = use_toast();
    let query = use_search_query();
    let mut semester = use_signal(|| 1i64);

    let mut notices = use_list("load notices", move || {
        let chosen = semester();
        async move { server::api::list_notices(chosen).await }
    });

    let mut pending_delete = use_signal(|| Option::<Notice>::None);
    let mut deleting = use_signal(|| false);

    let rows = notices.rows.read().filtered(&query.get());
    let view = ListView::of(&*notices.rows.read(), rows.len());

    let confirm_delete = move |_| {
        let Some(notice) = pending_delete() else {
            return;
        };
        spawn(async move {
            deleting.set(true);
            match server::api::delete_notice(notice.id).await {
                Ok(_) => {
                    notices.rows.write().remove_where(|n| n.id == notice.id);
                    toast.success("Notice deleted".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    report_failure(toast, "delete notice", &e);
                }
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    };

    let columns = if can_manage {
        vec!["Notice", "Semester", "Image", ""]
    } else {
        vec!["Notice", "Semester", "Image"]
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Notices" }
            }

            if can_manage {
                NoticeForm {
                    on_created: move |posted_to: i64| {
                        if posted_to == semester() {
                            notices.reload();
                        } else {
                            semester.set(posted_to);
                        }
                    },
                }
            }

            div { class: "filter-bar",
                SemesterSelect {
                    label: "Showing",
                    value: semester(),
                    on_change: move |s: i64| {
                        notices.rows.set(Default::default());
                        semester.set(s);
                    },
                }
            }

            ListTable {
                columns,
                view,
                empty: format!("No notices for {}", semester_label(semester())),
                on_retry: move |_| notices.reload(),
                for notice in rows {
                    DataTableRow { key: "{notice.id}",
                        DataTableCell { "{notice.name}" }
                        DataTableCell { "{semester_label(notice.semester)}" }
                        DataTableCell {
                            if let Some(url) = notice.image_url.clone() {
                                a { href: "{url}", target: "_blank", rel: "noopener",
                                    img { class: "notice-thumb", src: "{url}", alt: "{notice.name}" }
                                }
                            }
                        }
                        if can_manage {
                            DataTableCell { class: "row-actions",
                                Button {
                                    size: ButtonSize::Small,
                                    variant: ButtonVariant::Destructive,
                                    onclick: {
                                        let notice = notice.clone();
                                        move |_| pending_delete.set(Some(notice.clone()))
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }

            if can_manage {
                ConfirmDelete {
                    open: pending_delete.read().is_some(),
                    on_open_change: move |open: bool| {
                        if !open {
                            pending_delete.set(None);
                        }
                    },
                    title: "Delete this notice?",
                    description: "Students of that semester will no longer see it.",
                    busy: deleting(),
                    on_confirm: confirm_delete,
                }
            }
        }
    }
}
