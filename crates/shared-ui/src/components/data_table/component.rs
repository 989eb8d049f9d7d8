use dioxus::prelude::*;

use crate::components::skeleton::Skeleton;

/// Scrollable table wrapper.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Wraps `DataTableColumn`s in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

/// Table row, clickable when `onclick` is set.
#[component]
pub fn DataTableRow(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let has_click = onclick.is_some();
    rsx! {
        tr {
            class: if has_click { "data-table-row clickable" } else { "data-table-row" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn DataTableCell(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        td { ..attributes, {children} }
    }
}

/// Single full-width row shown when a loaded list has nothing to display.
#[component]
pub fn DataTableEmpty(
    colspan: usize,
    #[props(default = "No records found.".to_string())] message: String,
) -> Element {
    rsx! {
        tr { class: "data-table-empty",
            td { colspan: "{colspan}", "{message}" }
        }
    }
}

/// Placeholder rows rendered while a list is loading.
#[component]
pub fn DataTableSkeleton(columns: usize, #[props(default = 5)] rows: usize) -> Element {
    rsx! {
        for row in 0..rows {
            tr { key: "{row}", class: "data-table-skeleton",
                for col in 0..columns {
                    td { key: "{col}",
                        Skeleton { class: "data-table-skeleton-bar" }
                    }
                }
            }
        }
    }
}
