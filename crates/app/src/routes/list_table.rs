use dioxus::prelude::*;
use shared_types::ListState;
use shared_ui::{
    DataTable, DataTableBody, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableSkeleton,
    ErrorState,
};

/// What a list page should draw for its current state.
#[derive(Clone, Debug, PartialEq)]
pub enum ListView {
    Loading,
    Failed(String),
    Empty,
    Rows,
}

impl ListView {
    /// `visible` is the row count after search filtering.
    pub fn of<T>(state: &ListState<T>, visible: usize) -> Self {
        match state {
            ListState::Loading => ListView::Loading,
            ListState::Failed(message) => ListView::Failed(message.clone()),
            ListState::Loaded(_) if visible == 0 => ListView::Empty,
            ListState::Loaded(_) => ListView::Rows,
        }
    }
}

/// Table with the loading, failure and empty states every list page shares.
/// Failure replaces the table entirely so stale rows never show.
#[component]
pub fn ListTable(
    columns: Vec<&'static str>,
    view: ListView,
    #[props(default = "Nothing to show yet".to_string())] empty: String,
    on_retry: EventHandler<()>,
    children: Element,
) -> Element {
    if let ListView::Failed(message) = view {
        return rsx! {
            ErrorState { message, on_retry: move |_| on_retry.call(()) }
        };
    }

    let colspan = columns.len();
    rsx! {
        DataTable {
            DataTableHeader {
                for column in columns {
                    DataTableColumn { key: "{column}", "{column}" }
                }
            }
            match view {
                ListView::Loading => rsx! {
                    DataTableBody {
                        DataTableSkeleton { columns: colspan }
                    }
                },
                ListView::Empty => rsx! {
                    DataTableBody {
                        DataTableEmpty { colspan, message: empty }
                    }
                },
                _ => rsx! {
                    DataTableBody { {children} }
                },
            }
        }
    }
}
