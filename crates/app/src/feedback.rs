//! Turning server-function results into what the user sees: list states,
//! field errors and toasts.

use std::collections::HashMap;
use std::future::Future;

use dioxus::prelude::*;
use shared_types::{AppError, ListState};
use shared_ui::{use_toast, ToastOptions, Toasts};

/// Human-readable message carried by a server-function error.
pub fn error_text(err: &ServerFnError) -> String {
    AppError::friendly_message(&err.to_string())
}

/// Per-field validation messages carried by a server-function error.
pub fn field_errors(err: &ServerFnError) -> HashMap<String, String> {
    AppError::parse_field_errors(&err.to_string())
}

/// Log a failed action and show it as a toast. Returns the message shown.
pub fn report_failure(toast: Toasts, action: &str, err: &ServerFnError) -> String {
    let message = error_text(err);
    tracing::warn!(action, error = %message, "Request failed");
    toast.error(message.clone(), ToastOptions::new());
    message
}

/// Show a form rejected before it reached the server. Returns the field
/// messages so the form can highlight them.
pub fn report_invalid(toast: Toasts, err: AppError) -> HashMap<String, String> {
    toast.error(err.message.clone(), ToastOptions::new());
    err.field_errors
}

pub fn list_state<T>(result: Result<Vec<T>, ServerFnError>) -> ListState<T> {
    ListState::from_result(result.map_err(|e| error_text(&e)))
}

/// A page's list signal plus the resource that fills it.
pub struct ListHandle<T: 'static> {
    pub rows: Signal<ListState<T>>,
    loader: Resource<()>,
}

impl<T> Clone for ListHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListHandle<T> {}

impl<T> ListHandle<T> {
    /// Drop the current rows and fetch again.
    pub fn reload(&mut self) {
        self.rows.set(ListState::Loading);
        self.loader.restart();
    }
}

/// Fetch a list into a `ListState` signal. Signals read inside `fetch`
/// restart the fetch when they change; the superseded future is dropped, so
/// a late response never overwrites a newer one.
pub fn use_list<T, F, Fut>(action: &'static str, mut fetch: F) -> ListHandle<T>
where
    T: 'static,
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ServerFnError>> + 'static,
{
    let toast = use_toast();
    let mut rows = use_signal(|| ListState::<T>::Loading);

    let loader = use_resource(move || {
        let pending = fetch();
        async move {
            let result = pending.await;
            if let Err(e) = &result {
                report_failure(toast, action, e);
            }
            rows.set(list_state(result));
        }
    });

    ListHandle { rows, loader }
}
