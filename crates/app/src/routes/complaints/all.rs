use dioxus::prelude::*;
use shared_types::ComplaintSummary;
use shared_ui::{
    Badge, DataTableCell, DataTableRow, PageHeader, PageSubtitle, PageTitle, StatCard, StatGrid,
    StatTone,
};

use super::status_variant;
use crate::feedback::use_list;
use crate::format_helpers::{format_date_human, truncate};
use crate::routes::list_table::{ListTable, ListView};
use crate::search::use_search_query;

/// Every complaint filed at the school, newest first.
#[component]
pub fn AllComplaintsPage() -> Element {
    let query = use_search_query();
    let mut complaints = use_list("load complaints", server::api::list_all_complaints);

    let summary = ComplaintSummary::from_complaints(complaints.rows.read().items());
    let rows = complaints.rows.read().filtered(&query.get());
    let view = ListView::of(&*complaints.rows.read(), rows.len());
    let loaded = !complaints.rows.read().is_loading() && complaints.rows.read().error().is_none();

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Complaints" }
                PageSubtitle { "Filed by teachers and students" }
            }

            if loaded {
                StatGrid {
                    StatCard { label: "Total", value: summary.total.to_string() }
                    StatCard { label: "Solved", value: summary.solved.to_string(), tone: StatTone::Positive }
                    StatCard {
                        label: "Open",
                        value: summary.unsolved.to_string(),
                        tone: if summary.unsolved > 0 { StatTone::Negative } else { StatTone::Neutral },
                    }
                }
            }

            ListTable {
                columns: vec!["Date", "Title", "Description", "Suggestion", "Status", "Attachment"],
                view,
                empty: "No complaints",
                on_retry: move |_| complaints.reload(),
                for complaint in rows {
                    DataTableRow { key: "{complaint.id}",
                        DataTableCell { "{format_date_human(&complaint.date)}" }
                        DataTableCell { "{complaint.title}" }
                        DataTableCell { title: "{complaint.description}", "{truncate(&complaint.description, 80)}" }
                        DataTableCell { "{truncate(&complaint.suggestion, 60)}" }
                        DataTableCell {
                            Badge { variant: status_variant(&complaint), "{complaint.status_label()}" }
                        }
                        DataTableCell {
                            if let Some(url) = complaint.attachment_url.clone() {
                                a { href: "{url}", target: "_blank", rel: "noopener", "View" }
                            }
                        }
                    }
                }
            }
        }
    }
}
