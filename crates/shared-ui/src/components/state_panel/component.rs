use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleExclamation, FaInbox};
use dioxus_free_icons::Icon;

use crate::components::button::{Button, ButtonSize, ButtonVariant};

/// Shown in place of a list that failed to load. Never rendered alongside
/// stale rows.
#[component]
pub fn ErrorState(
    message: String,
    #[props(default)] on_retry: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "state-panel", "data-kind": "error", role: "alert",
            Icon { icon: FaCircleExclamation, width: 28, height: 28 }
            p { class: "state-panel-title", "Something went wrong" }
            p { class: "state-panel-message", "{message}" }
            if let Some(retry) = on_retry {
                Button {
                    variant: ButtonVariant::Outline,
                    size: ButtonSize::Small,
                    onclick: move |_| retry.call(()),
                    "Try again"
                }
            }
        }
    }
}

/// Shown when a section has nothing to list yet.
#[component]
pub fn EmptyState(
    title: String,
    #[props(default)] description: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "state-panel", "data-kind": "empty",
            Icon { icon: FaInbox, width: 28, height: 28 }
            p { class: "state-panel-title", "{title}" }
            if let Some(description) = description {
                p { class: "state-panel-message", "{description}" }
            }
            {children}
        }
    }
}
