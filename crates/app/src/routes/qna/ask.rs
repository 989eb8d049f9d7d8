use dioxus::prelude::*;
use shared_types::{CreateQuestionRequest, ValidateRequest};
use shared_ui::{
    use_toast, Button, Card, CardContent, Form, PageHeader, PageSubtitle, PageTitle, Textarea,
    ToastOptions,
};
use std::collections::HashMap;

use super::CommunityGate;
use crate::feedback::{field_errors, report_failure, report_invalid};
use crate::routes::Route;

/// Post a question to the board. With `with_answer` the poster can answer it
/// in the same step.
#[component]
pub fn AskQuestionPage(back: Route, #[props(default = false)] with_answer: bool) -> Element {
    rsx! {
        CommunityGate {
            AskQuestionForm { back, with_answer }
        }
    }
}

#[component]
fn AskQuestionForm(back: Route, with_answer: bool) -> Element {
    let toast = use_toast();
    let mut question = use_signal(String::new);
    let mut answer = use_signal(String::new);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let handle_submit = move |_: FormEvent| {
        let back = back.clone();
        async move {
            let req = CreateQuestionRequest::new(&question(), &answer());
            if let Err(err) = req.validate_request() {
                errors.set(report_invalid(toast, err));
                return;
            }
            errors.set(HashMap::new());
            saving.set(true);
            match server::api::create_qna(req.question, req.answer).await {
                Ok(entry) => {
                    let msg = if entry.is_answered() { "Question and answer posted" } else { "Question posted" };
                    toast.success(msg.to_string(), ToastOptions::new());
                    navigator().push(back);
                }
                Err(e) => {
                    errors.set(field_errors(&e));
                    report_failure(toast, "post question", &e);
                }
            }
            saving.set(false);
        }
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { if with_answer { "Add Q&A" } else { "Ask a Question" } }
                PageSubtitle { "Everyone signed in can read the board" }
            }
            Card {
                CardContent {
                    Form { onsubmit: handle_submit,
                        Textarea {
                            label: "Question",
                            required: true,
                            rows: 3,
                            value: question(),
                            on_input: move |e: FormEvent| question.set(e.value()),
                            error: errors.read().get("question").cloned(),
                        }
                        if with_answer {
                            Textarea {
                                label: "Answer",
                                rows: 4,
                                value: answer(),
                                on_input: move |e: FormEvent| answer.set(e.value()),
                                error: errors.read().get("answer").cloned(),
                            }
                        }
                        Button { button_type: "submit", loading: saving(), "Post" }
                    }
                }
            }
        }
    }
}
