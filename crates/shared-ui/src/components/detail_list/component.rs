use dioxus::prelude::*;

/// Vertical list of label/value rows, used by the profile page.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        dl { class: "detail-list", {children} }
    }
}

/// One label/value row. Blank values read "Not provided".
#[component]
pub fn DetailItem(label: &'static str, #[props(default)] value: String) -> Element {
    let shown = if value.trim().is_empty() {
        "Not provided".to_string()
    } else {
        value
    };

    rsx! {
        div { class: "detail-item",
            dt { class: "detail-item-label", "{label}" }
            dd { class: "detail-item-value", "{shown}" }
        }
    }
}
