use dioxus::prelude::*;
use shared_types::{
    attendance_percentage, flatten_sheets, semester_label, AttendanceQuery, AttendanceSheet,
};
use shared_ui::{
    Badge, DataTableCell, DataTableRow, PageHeader, PageSubtitle, PageTitle, StatCard, StatGrid,
    StatTone,
};

use super::status_variant;
use crate::auth::use_user_id;
use crate::feedback::use_list;
use crate::format_helpers::{format_date_human, format_percent};
use crate::routes::list_table::{ListTable, ListView};
use crate::routes::notices::SemesterSelect;
use crate::search::use_search_query;

fn tone_for(percent: f64) -> StatTone {
    if percent >= 75.0 {
        StatTone::Positive
    } else if percent > 0.0 {
        StatTone::Negative
    } else {
        StatTone::Neutral
    }
}

/// The signed-in student's attendance with a per-semester percentage.
#[component]
pub fn MyAttendancePage() -> Element {
    let query = use_search_query();
    let user_id = use_user_id().to_string();
    let mut semester = use_signal(|| 1i64);
    let mut sheets = use_signal(Vec::<AttendanceSheet>::new);

    let mut records = use_list("load my attendance", move || {
        let user_id = user_id.clone();
        async move {
            let query = AttendanceQuery {
                user_id: Some(user_id),
                ..AttendanceQuery::default()
            };
            let fetched = server::api::query_attendance(query).await?;
            let rows = flatten_sheets(&fetched);
            sheets.set(fetched);
            Ok(rows)
        }
    });

    let chosen = semester();
    let percent = attendance_percentage(&sheets.read(), chosen);
    let rows: Vec<_> = records
        .rows
        .read()
        .filtered(&query.get())
        .into_iter()
        .filter(|row| row.semester == chosen)
        .collect();
    let view = ListView::of(&*records.rows.read(), rows.len());

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "My Attendance" }
                PageSubtitle { "{semester_label(chosen)}" }
            }

            div { class: "filter-bar",
                SemesterSelect {
                    label: "Semester",
                    value: chosen,
                    on_change: move |s: i64| semester.set(s),
                }
            }

            StatGrid {
                StatCard {
                    label: "Attendance",
                    value: format_percent(percent),
                    hint: Some(semester_label(chosen)),
                    tone: tone_for(percent),
                }
            }

            ListTable {
                columns: vec!["Date", "Subject", "Status"],
                view,
                empty: format!("No attendance recorded for {}", semester_label(chosen)),
                on_retry: move |_| records.reload(),
                for row in rows {
                    DataTableRow { key: "{row.record_id}",
                        DataTableCell { "{format_date_human(&row.date)}" }
                        DataTableCell { "{row.subject}" }
                        DataTableCell {
                            Badge { variant: status_variant(row.status), "{row.status.label()}" }
                        }
                    }
                }
            }
        }
    }
}
