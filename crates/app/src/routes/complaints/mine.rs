use dioxus::prelude::*;
use shared_types::{Complaint, ComplaintEdit, ValidateRequest};
use shared_ui::{
    use_toast, Badge, Button, ButtonSize, ButtonVariant, ConfirmDelete, DataTableCell,
    DataTableRow, Input, PageActions, PageHeader, PageTitle, Pagination, Textarea, ToastOptions,
};
use std::collections::HashMap;

use super::status_variant;
use crate::feedback::{field_errors, report_failure, report_invalid, use_list};
use crate::format_helpers::{format_date_human, truncate};
use crate::routes::list_table::{ListTable, ListView};
use crate::routes::Route;
use crate::search::use_search_query;

const LOCKED_HINT: &str = "Solved complaints can no longer be changed";

/// The signed-in user's own complaints, one upstream page at a time, with
/// inline edit and delete. `create` is the section's new-complaint route.
#[component]
pub fn MyComplaintsPage(create: Route) -> Element {
    let toast = use_toast();
    let query = use_search_query();

    let mut page = use_signal(|| 1i64);
    let mut paging = use_signal(|| (false, false));

    let mut complaints = use_list("load my complaints", move || {
        let requested = page();
        async move {
            let paged = server::api::list_my_complaints(requested).await?;
            paging.set((paged.has_prev, paged.has_next));
            Ok(paged.items)
        }
    });

    let mut editing = use_signal(|| Option::<i64>::None);
    let mut draft = use_signal(ComplaintEdit::default);
    let mut edit_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let mut pending_delete = use_signal(|| Option::<Complaint>::None);
    let mut deleting = use_signal(|| false);

    let rows = complaints.rows.read().filtered(&query.get());
    let view = ListView::of(&*complaints.rows.read(), rows.len());
    let (has_prev, has_next) = paging();

    let save_edit = move |complaint_id: i64| async move {
        let req = draft.read().clone();
        let req = ComplaintEdit::new(&req.title, &req.description, &req.suggestion);
        if let Err(err) = req.validate_request() {
            edit_errors.set(report_invalid(toast, err));
            return;
        }
        saving.set(true);
        match server::api::edit_complaint(complaint_id, req.clone()).await {
            Ok(_) => {
                complaints
                    .rows
                    .write()
                    .patch_where(|c| c.id == complaint_id, |c| c.apply_edit(&req));
                editing.set(None);
                toast.success("Complaint updated".to_string(), ToastOptions::new());
            }
            Err(e) => {
                edit_errors.set(field_errors(&e));
                report_failure(toast, "edit complaint", &e);
            }
        }
        saving.set(false);
    };

    let confirm_delete = move |_| {
        let Some(complaint) = pending_delete().filter(|c| !c.is_locked()) else {
            return;
        };
        spawn(async move {
            deleting.set(true);
            match server::api::delete_complaint(complaint.id).await {
                Ok(_) => {
                    complaints.rows.write().remove_where(|c| c.id == complaint.id);
                    toast.success("Complaint deleted".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    report_failure(toast, "delete complaint", &e);
                }
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "My Complaints" }
                PageActions {
                    Button {
                        onclick: move |_| { navigator().push(create.clone()); },
                        "New Complaint"
                    }
                }
            }

            ListTable {
                columns: vec!["Date", "Title", "Description", "Suggestion", "Status", ""],
                view,
                empty: "You have not filed any complaints",
                on_retry: move |_| complaints.reload(),
                for complaint in rows {
                    if editing() == Some(complaint.id) {
                        DataTableRow { key: "{complaint.id}-edit",
                            td { colspan: "6",
                                div { class: "inline-editor",
                                    Input {
                                        label: "Title",
                                        required: true,
                                        value: draft.read().title.clone(),
                                        on_input: move |e: FormEvent| draft.write().title = e.value(),
                                        error: edit_errors.read().get("title").cloned(),
                                    }
                                    Textarea {
                                        label: "Description",
                                        required: true,
                                        value: draft.read().description.clone(),
                                        on_input: move |e: FormEvent| draft.write().description = e.value(),
                                        error: edit_errors.read().get("description").cloned(),
                                    }
                                    Textarea {
                                        label: "Suggestion",
                                        rows: 2,
                                        value: draft.read().suggestion.clone(),
                                        on_input: move |e: FormEvent| draft.write().suggestion = e.value(),
                                    }
                                    div { class: "inline-editor-actions",
                                        Button {
                                            size: ButtonSize::Small,
                                            loading: saving(),
                                            onclick: {
                                                let id = complaint.id;
                                                move |_| { spawn(save_edit(id)); }
                                            },
                                            "Save"
                                        }
                                        Button {
                                            size: ButtonSize::Small,
                                            variant: ButtonVariant::Ghost,
                                            onclick: move |_| editing.set(None),
                                            "Cancel"
                                        }
                                    }
                                }
                            }
                        }
                    } else {
                        DataTableRow { key: "{complaint.id}",
                            DataTableCell { "{format_date_human(&complaint.date)}" }
                            DataTableCell { "{complaint.title}" }
                            DataTableCell { "{truncate(&complaint.description, 80)}" }
                            DataTableCell { "{truncate(&complaint.suggestion, 60)}" }
                            DataTableCell {
                                Badge { variant: status_variant(&complaint), "{complaint.status_label()}" }
                            }
                            DataTableCell { class: "row-actions",
                                Button {
                                    size: ButtonSize::Small,
                                    variant: ButtonVariant::Outline,
                                    disabled: complaint.is_locked(),
                                    title: if complaint.is_locked() { LOCKED_HINT } else { "Edit this complaint" },
                                    onclick: {
                                        let complaint = complaint.clone();
                                        move |_| {
                                            draft.set(ComplaintEdit::from_complaint(&complaint));
                                            edit_errors.set(HashMap::new());
                                            editing.set(Some(complaint.id));
                                        }
                                    },
                                    "Edit"
                                }
                                Button {
                                    size: ButtonSize::Small,
                                    variant: ButtonVariant::Destructive,
                                    disabled: complaint.is_locked(),
                                    title: if complaint.is_locked() { LOCKED_HINT } else { "Delete this complaint" },
                                    onclick: {
                                        let complaint = complaint.clone();
                                        move |_| pending_delete.set(Some(complaint.clone()))
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }

            Pagination {
                page: page(),
                has_prev,
                has_next,
                on_change: move |next: i64| {
                    editing.set(None);
                    page.set(next);
                },
            }

            ConfirmDelete {
                open: pending_delete.read().is_some(),
                on_open_change: move |open: bool| {
                    if !open {
                        pending_delete.set(None);
                    }
                },
                title: "Delete this complaint?",
                description: "The complaint and its attachment are removed for good.",
                busy: deleting(),
                on_confirm: confirm_delete,
            }
        }
    }
}
