use dioxus::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};

/// Page-number pagination for upstream lists that only report whether a
/// previous or next page exists.
#[component]
pub fn Pagination(
    page: i64,
    has_prev: bool,
    has_next: bool,
    on_change: EventHandler<i64>,
) -> Element {
    if !has_prev && !has_next {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "pagination", "aria-label": "Pagination",
            Button {
                variant: ButtonVariant::Outline,
                size: ButtonSize::Small,
                disabled: !has_prev,
                onclick: move |_| on_change.call((page - 1).max(1)),
                "Previous"
            }
            span { class: "pagination-info", "Page {page}" }
            Button {
                variant: ButtonVariant::Outline,
                size: ButtonSize::Small,
                disabled: !has_next,
                onclick: move |_| on_change.call(page + 1),
                "Next"
            }
        }
    }
}
