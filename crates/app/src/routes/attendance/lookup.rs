use dioxus::prelude::*;
use shared_types::{flatten_sheets, AttendanceFilter, AttendanceQuery, AttendanceRow};
use shared_ui::{
    use_toast, Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, ConfirmDelete,
    DataTableCell, DataTableRow, Form, FormRow, FormSelect, Input, PageActions, PageHeader,
    PageSubtitle, PageTitle, ToastOptions,
};
use std::collections::HashMap;

use super::{filter_from_key, filter_key, filter_label, status_variant};
use crate::feedback::{report_failure, report_invalid, use_list};
use crate::format_helpers::format_date_human;
use crate::routes::list_table::{ListTable, ListView};
use crate::routes::Route;
use crate::search::use_search_query;

/// Look up attendance records with one of `filters` and toggle marks.
/// `can_delete` adds a delete action; `take` links to the sheet form.
///
/// If the first filter is `All`, every record loads on open; otherwise the
/// table stays empty until a search is run.
#[component]
pub fn AttendanceLookupPage(
    filters: Vec<AttendanceFilter>,
    #[props(default = false)] can_delete: bool,
    #[props(default)] take: Option<Route>,
) -> Element {
    let toast = use_toast();
    let query = use_search_query();
    let initial = filters.first().copied().unwrap_or_default();

    let mut filter = use_signal(|| initial);
    let mut user_id = use_signal(String::new);
    let mut subject_id = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut applied = use_signal(move || {
        (initial == AttendanceFilter::All).then(AttendanceQuery::default)
    });

    let mut records = use_list("load attendance", move || {
        let applied = applied();
        async move {
            match applied {
                Some(q) => server::api::query_attendance(q)
                    .await
                    .map(|sheets| flatten_sheets(&sheets)),
                None => Ok(Vec::new()),
            }
        }
    });

    let mut toggling = use_signal(|| Option::<i64>::None);
    let mut pending_delete = use_signal(|| Option::<AttendanceRow>::None);
    let mut deleting = use_signal(|| false);

    let rows = records.rows.read().filtered(&query.get());
    let view = ListView::of(&*records.rows.read(), rows.len());
    let searched = applied.read().is_some();

    let handle_search = move |_: FormEvent| {
        match AttendanceQuery::build(filter(), &user_id(), &subject_id(), &date()) {
            Ok(q) => {
                errors.set(HashMap::new());
                if applied() == Some(q.clone()) {
                    records.reload();
                } else {
                    records.rows.set(Default::default());
                    applied.set(Some(q));
                }
            }
            Err(err) => errors.set(report_invalid(toast, err)),
        }
    };

    let toggle = move |row: AttendanceRow| {
        spawn(async move {
            toggling.set(Some(row.record_id));
            match server::api::toggle_attendance(row.record_id, row.status, row.date.clone()).await {
                Ok(next) => {
                    records
                        .rows
                        .write()
                        .patch_where(|r| r.record_id == row.record_id, |r| r.status = next);
                    toast.success(format!("Marked {}", next.label()), ToastOptions::new());
                }
                Err(e) => {
                    report_failure(toast, "update attendance", &e);
                }
            }
            toggling.set(None);
        });
    };

    let confirm_delete = move |_| {
        let Some(row) = pending_delete() else {
            return;
        };
        spawn(async move {
            deleting.set(true);
            match server::api::delete_attendance(row.record_id).await {
                Ok(_) => {
                    records.rows.write().remove_where(|r| r.record_id == row.record_id);
                    toast.success("Attendance record deleted".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    report_failure(toast, "delete attendance", &e);
                }
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    };

    let current = filter();
    let wants_user = matches!(current, AttendanceFilter::User | AttendanceFilter::UserAndSubject);
    let wants_subject = matches!(
        current,
        AttendanceFilter::Subject | AttendanceFilter::UserAndSubject
    );
    let wants_date = current == AttendanceFilter::Date;

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Attendance" }
                PageSubtitle { "Click a status to flip it between present and absent" }
                if let Some(take) = take {
                    PageActions {
                        Button {
                            onclick: move |_| { navigator().push(take.clone()); },
                            "Take Attendance"
                        }
                    }
                }
            }

            Card {
                CardContent {
                    Form { onsubmit: handle_search,
                        FormRow {
                            FormSelect {
                                label: "Filter",
                                value: filter_key(current),
                                onchange: move |e: FormEvent| {
                                    errors.set(HashMap::new());
                                    filter.set(filter_from_key(&e.value()));
                                },
                                for option_filter in filters.iter().copied() {
                                    option {
                                        key: "{filter_key(option_filter)}",
                                        value: filter_key(option_filter),
                                        selected: option_filter == current,
                                        "{filter_label(option_filter)}"
                                    }
                                }
                            }
                            if wants_user {
                                Input {
                                    label: "User ID",
                                    value: user_id(),
                                    on_input: move |e: FormEvent| user_id.set(e.value()),
                                    error: errors.read().get("user_id").cloned(),
                                }
                            }
                            if wants_subject {
                                Input {
                                    label: "Subject ID",
                                    value: subject_id(),
                                    on_input: move |e: FormEvent| subject_id.set(e.value()),
                                    error: errors.read().get("subject_id").cloned(),
                                }
                            }
                            if wants_date {
                                Input {
                                    label: "Date",
                                    input_type: "date",
                                    value: date(),
                                    on_input: move |e: FormEvent| date.set(e.value()),
                                    error: errors.read().get("date").cloned(),
                                }
                            }
                        }
                        Button { button_type: "submit", "Search" }
                    }
                }
            }

            ListTable {
                columns: if can_delete {
                    vec!["Date", "User", "Subject", "Semester", "Status", ""]
                } else {
                    vec!["Date", "User", "Subject", "Semester", "Status"]
                },
                view,
                empty: if searched { "No attendance records match" } else { "Choose a filter and search" },
                on_retry: move |_| records.reload(),
                for row in rows {
                    DataTableRow { key: "{row.record_id}",
                        DataTableCell { "{format_date_human(&row.date)}" }
                        DataTableCell { "{row.user_id}" }
                        DataTableCell { "{row.subject}" }
                        DataTableCell { "{row.semester}" }
                        DataTableCell {
                            button {
                                class: "status-toggle",
                                r#type: "button",
                                disabled: toggling() == Some(row.record_id),
                                title: "Toggle present/absent",
                                onclick: {
                                    let row = row.clone();
                                    move |_| toggle(row.clone())
                                },
                                Badge { variant: status_variant(row.status), "{row.status.label()}" }
                            }
                        }
                        if can_delete {
                            DataTableCell { class: "row-actions",
                                Button {
                                    size: ButtonSize::Small,
                                    variant: ButtonVariant::Destructive,
                                    onclick: {
                                        let row = row.clone();
                                        move |_| pending_delete.set(Some(row.clone()))
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }

            if can_delete {
                ConfirmDelete {
                    open: pending_delete.read().is_some(),
                    on_open_change: move |open: bool| {
                        if !open {
                            pending_delete.set(None);
                        }
                    },
                    title: "Delete this attendance record?",
                    description: "Only this student's mark is removed. The rest of the sheet stays.",
                    busy: deleting(),
                    on_confirm: confirm_delete,
                }
            }
        }
    }
}
