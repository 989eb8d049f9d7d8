use dioxus::prelude::*;
use shared_types::{semester_label, DashboardStats, SemesterRate};
use shared_ui::{
    Bar, BarChart, Card, CardContent, CardDescription, CardHeader, CardTitle, ErrorState,
    PageHeader, PageSubtitle, PageTitle, Skeleton, StatCard, StatGrid, StatTone,
};
use shared_ui::{use_toast, ToastOptions};

use crate::feedback::report_failure;
use crate::format_helpers::format_percent;

fn notice_bars(stats: &DashboardStats) -> Vec<Bar> {
    stats
        .notices_by_semester
        .iter()
        .map(|row| Bar {
            label: semester_label(row.semester),
            value: row.count as f64,
            display: row.count.to_string(),
        })
        .collect()
}

fn attendance_bars(rates: &[SemesterRate]) -> Vec<Bar> {
    rates
        .iter()
        .map(|row| Bar {
            label: semester_label(row.semester),
            value: row.percent,
            display: format_percent(row.percent),
        })
        .collect()
}

/// Shown in place of a figure whose section failed to load.
const UNAVAILABLE: &str = "n/a";

fn count_or_unavailable(value: Option<usize>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| UNAVAILABLE.to_string())
}

/// Admin overview: complaint, people and notice counts plus attendance by
/// semester. Sections that failed to load show `n/a` and raise a toast.
#[component]
pub fn DashboardPage() -> Element {
    let toast = use_toast();

    let mut stats = use_resource(move || async move {
        let result = server::api::get_dashboard_stats().await;
        match &result {
            Ok(data) => {
                for section in data.missing_sections() {
                    tracing::warn!(section, "Dashboard section unavailable");
                    toast.error(format!("Could not load {section}"), ToastOptions::new());
                }
            }
            Err(e) => report_failure(toast, "load dashboard", e),
        }
        result.map_err(|e| crate::feedback::error_text(&e))
    });

    let body = match &*stats.read() {
        None => rsx! {
            StatGrid {
                for i in 0..5 {
                    Skeleton { key: "{i}", class: "stat-card-skeleton" }
                }
            }
        },
        Some(Err(message)) => rsx! {
            ErrorState {
                message: message.clone(),
                on_retry: move |_| stats.restart(),
            }
        },
        Some(Ok(data)) => {
            let complaints = data.complaints;
            let solved_hint = complaints.map(|c| format!("{} solved", c.solved));
            let unsolved_tone = match complaints {
                Some(c) if c.unsolved > 0 => StatTone::Negative,
                Some(_) => StatTone::Positive,
                None => StatTone::Neutral,
            };
            let notices = notice_bars(data);
            let attendance = data.attendance_by_semester.as_deref().map(attendance_bars);
            let max_notices = data.max_notices() as f64;
            rsx! {
                StatGrid {
                    StatCard {
                        label: "Complaints",
                        value: count_or_unavailable(complaints.map(|c| c.total)),
                        hint: solved_hint,
                    }
                    StatCard {
                        label: "Unsolved",
                        value: count_or_unavailable(complaints.map(|c| c.unsolved)),
                        tone: unsolved_tone,
                    }
                    StatCard { label: "Teachers", value: count_or_unavailable(data.people.map(|p| p.teachers)) }
                    StatCard { label: "Students", value: count_or_unavailable(data.people.map(|p| p.students)) }
                    StatCard { label: "Notices", value: data.total_notices().to_string() }
                }

                div { class: "dashboard-charts",
                    Card {
                        CardHeader {
                            CardTitle { "Notices per semester" }
                        }
                        CardContent {
                            BarChart { bars: notices, max: max_notices }
                        }
                    }
                    Card {
                        CardHeader {
                            CardTitle { "Attendance per semester" }
                            CardDescription { "Share of present marks across all sheets" }
                        }
                        CardContent {
                            if let Some(bars) = attendance {
                                BarChart { bars, max: 100.0 }
                            } else {
                                p { class: "muted", "Attendance could not be loaded." }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Dashboard" }
                PageSubtitle { "School at a glance" }
            }
            {body}
        }
    }
}
