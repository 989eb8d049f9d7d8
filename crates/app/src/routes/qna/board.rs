use dioxus::prelude::*;
use shared_types::QnaEntry;
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, ConfirmDelete,
    DataTableCell, DataTableRow, Form, FormRow, Input, PageActions, PageHeader, PageTitle,
    ToastOptions,
};

use super::CommunityGate;
use crate::feedback::{report_failure, use_list};
use crate::routes::list_table::{ListTable, ListView};
use crate::routes::Route;

/// Search term sent upstream, or `None` for the whole board.
fn search_term(raw: &str) -> Option<String> {
    let term = raw.trim();
    (!term.is_empty()).then(|| term.to_string())
}

/// Community questions and answers. `ask` is the section's posting route.
#[component]
pub fn QnaBoardPage(ask: Route, #[props(default = false)] can_delete: bool) -> Element {
    rsx! {
        CommunityGate {
            QnaBoard { ask, can_delete }
        }
    }
}

#[component]
fn QnaBoard(ask: Route, can_delete: bool) -> Element {
    let toast = use_toast();
    let mut draft = use_signal(String::new);
    let mut applied = use_signal(|| Option::<String>::None);

    let mut entries = use_list("load q&a", move || {
        let search = applied();
        async move { server::api::list_qna(search).await }
    });

    let mut pending_delete = use_signal(|| Option::<QnaEntry>::None);
    let mut deleting = use_signal(|| false);

    let rows = entries.rows.read().items().to_vec();
    let view = ListView::of(&*entries.rows.read(), rows.len());
    let empty = match applied() {
        Some(term) => format!("No questions mention \"{term}\""),
        None => "No questions yet".to_string(),
    };

    let handle_search = move |_: FormEvent| {
        let term = search_term(&draft());
        if applied() == term {
            entries.reload();
        } else {
            entries.rows.set(Default::default());
            applied.set(term);
        }
    };

    let confirm_delete = move |_| {
        let Some(entry) = pending_delete() else {
            return;
        };
        spawn(async move {
            deleting.set(true);
            match server::api::delete_question(entry.id).await {
                Ok(_) => {
                    entries.rows.write().remove_where(|q| q.id == entry.id);
                    toast.success("Question deleted".to_string(), ToastOptions::new());
                }
                Err(e) => {
                    report_failure(toast, "delete question", &e);
                }
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Q&A Board" }
                PageActions {
                    Button {
                        onclick: move |_| { navigator().push(ask.clone()); },
                        "Ask a Question"
                    }
                }
            }

            Form { onsubmit: handle_search,
                FormRow {
                    Input {
                        placeholder: "Search questions and answers",
                        value: draft(),
                        on_input: move |e: FormEvent| draft.set(e.value()),
                    }
                    Button { button_type: "submit", variant: ButtonVariant::Secondary, "Search" }
                }
            }

            ListTable {
                columns: if can_delete { vec!["Question", "Answer", "", ""] } else { vec!["Question", "Answer", ""] },
                view,
                empty,
                on_retry: move |_| entries.reload(),
                for entry in rows {
                    DataTableRow { key: "{entry.id}",
                        DataTableCell { "{entry.question}" }
                        DataTableCell {
                            if entry.is_answered() {
                                "{entry.answer}"
                            } else {
                                span { class: "muted", "No answer yet" }
                            }
                        }
                        DataTableCell {
                            if entry.is_answered() {
                                Badge { variant: BadgeVariant::Success, "Answered" }
                            } else {
                                Badge { variant: BadgeVariant::Warning, "Open" }
                            }
                        }
                        if can_delete {
                            DataTableCell { class: "row-actions",
                                Button {
                                    size: ButtonSize::Small,
                                    variant: ButtonVariant::Destructive,
                                    onclick: {
                                        let entry = entry.clone();
                                        move |_| pending_delete.set(Some(entry.clone()))
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
                    title: "Delete this question?",
                    description: "Its answers are removed with it.",
                    busy: deleting(),
                    on_confirm: confirm_delete,
                }
            }
        }
    }
}
