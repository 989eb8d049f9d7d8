use dioxus::prelude::*;
use dioxus_primitives::checkbox as prim;

pub use prim::CheckboxState;

#[component]
pub fn Checkbox(mut props: prim::CheckboxProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "checkbox", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Checkbox { ..props }
    }
}

#[component]
pub fn CheckboxIndicator(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let mut attrs = attributes;
    attrs.push(Attribute::new("class", "checkbox-indicator", None, false));

    rsx! {
        prim::CheckboxIndicator {
            attributes: attrs,
            svg {
                class: "checkbox-icon",
                xmlns: "http://www.w3.org/2000/svg",
                width: "14",
                height: "14",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "3",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M20 6L9 17l-5-5" }
            }
        }
    }
}

/// Checkbox with a clickable text label, as used for permission grants.
#[component]
pub fn CheckboxField(
    label: String,
    checked: bool,
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        label { class: "checkbox-field",
            Checkbox {
                default_checked: if checked { CheckboxState::Checked } else { CheckboxState::Unchecked },
                on_checked_change: move |state: CheckboxState| {
                    on_change.call(matches!(state, CheckboxState::Checked));
                },
                CheckboxIndicator {}
            }
            span { class: "checkbox-field-label", "{label}" }
        }
    }
}
