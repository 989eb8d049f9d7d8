use dioxus::prelude::*;
use shared_types::{
    permission_label, RoleRequest, RoleWithPermissions, ValidateRequest, PERMISSION_NAMES,
    ROLE_CREATED_MSG,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent,
    CardDescription, CardHeader, CardTitle, CheckboxField, ConfirmDelete, DataTableCell,
    DataTableRow, Form, FormError, Input, PageActions, PageHeader, PageTitle, ToastOptions,
};
use std::collections::HashMap;

use super::list_table::{ListTable, ListView};
use super::Route;
use crate::feedback::{field_errors, report_failure, report_invalid, use_list};
use crate::search::use_search_query;

/// Role name plus one checkbox per permission. Shared by the create page
/// and the inline editor.
#[component]
fn PermissionFields(draft: Signal<RoleRequest>, errors: HashMap<String, String>) -> Element {
    let mut draft = draft;
    let current = draft.read().clone();

    rsx! {
        Input {
            label: "Role name",
            required: true,
            value: current.role.clone(),
            on_input: move |e: FormEvent| draft.write().role = e.value(),
            error: errors.get("role").cloned(),
        }
        div { class: "permission-grid",
            for name in PERMISSION_NAMES.iter().copied() {
                CheckboxField {
                    key: "{name}",
                    label: permission_label(name),
                    checked: current.permission.get(name).copied().unwrap_or(false),
                    on_change: move |granted: bool| {
                        draft.write().permission.insert(name.to_string(), granted);
                    },
                }
            }
        }
        FormError { message: errors.get("permission").cloned() }
    }
}

/// Roles with their permissions; edit and delete inline.
#[component]
pub fn RoleListPage() -> Element {
    let toast = use_toast();
    let query = use_search_query();
    let mut roles = use_list("load roles", server::api::list_roles);

    let mut editing = use_signal(|| Option::<i64>::None);
    let draft = use_signal(|| RoleRequest::new("", []));
    let mut edit_errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let mut pending_delete = use_signal(|| Option::<RoleWithPermissions>::None);
    let mut deleting = use_signal(|| false);

    let rows = roles.rows.read().filtered(&query.get());
    let view = ListView::of(&*roles.rows.read(), rows.len());

    let mut start_edit = move |role: &RoleWithPermissions| {
        let mut draft = draft;
        draft.set(RoleRequest::from_role(role));
        edit_errors.set(HashMap::new());
        editing.set(Some(role.role_id));
    };

    let save_edit = move |role_id: i64| async move {
        let req = draft.read().clone();
        if let Err(err) = req.validate_request() {
            edit_errors.set(report_invalid(toast, err));
            return;
        }
        saving.set(true);
        match server::api::update_role(role_id, req.clone()).await {
            Ok(_) => {
                roles
                    .rows
                    .write()
                    .patch_where(|r| r.role_id == role_id, |r| req.apply_to(r));
                editing.set(None);
                toast.success("Role updated".to_string(), ToastOptions::new());
            }
            Err(e) => {
                edit_errors.set(field_errors(&e));
                report_failure(toast, "update role", &e);
            }
        }
        saving.set(false);
    };

    let confirm_delete = move |_| {
        let Some(role) = pending_delete() else {
            return;
        };
        spawn(async move {
            deleting.set(true);
            match server::api::delete_role(role.role_id).await {
                Ok(_) => {
                    roles.rows.write().remove_where(|r| r.role_id == role.role_id);
                    toast.success(format!("Deleted role {}", role.name), ToastOptions::new());
                }
                Err(e) => {
                    report_failure(toast, "delete role", &e);
                }
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    };

    let delete_title = pending_delete
        .read()
        .as_ref()
        .map(|r| format!("Delete role \"{}\"?", r.name))
        .unwrap_or_default();

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Roles" }
                PageActions {
                    Button {
                        onclick: move |_| { navigator().push(Route::AdminRoleCreate {}); },
                        "Create Role"
                    }
                }
            }

            ListTable {
                columns: vec!["Role", "Permissions", ""],
                view,
                empty: "No roles yet",
                on_retry: move |_| roles.reload(),
                for role in rows {
                    if editing() == Some(role.role_id) {
                        DataTableRow { key: "{role.role_id}-edit",
                            td { colspan: "3",
                                div { class: "inline-editor",
                                    PermissionFields { draft, errors: edit_errors() }
                                    div { class: "inline-editor-actions",
                                        Button {
                                            size: ButtonSize::Small,
                                            loading: saving(),
                                            onclick: {
                                                let role_id = role.role_id;
                                                move |_| { spawn(save_edit(role_id)); }
                                            },
                                            "Save"
                                        }
                                        Button {
                                            size: ButtonSize::Small,
                                            variant: ButtonVariant::Ghost,
                                            onclick: move |_| editing.set(None),
                                            "Cancel"
                                        }
                                    }
                                }
                            }
                        }
                    } else {
                        DataTableRow { key: "{role.role_id}",
                            DataTableCell { "{role.name}" }
                            DataTableCell {
                                div { class: "badge-list",
                                    for permission in role.permissions.iter() {
                                        Badge { key: "{permission.name}", variant: BadgeVariant::Secondary,
                                            "{permission_label(&permission.name)}"
                                        }
                                    }
                                    if role.permissions.is_empty() {
                                        span { class: "muted", "No permissions" }
                                    }
                                }
                            }
                            DataTableCell { class: "row-actions",
                                Button {
                                    size: ButtonSize::Small,
                                    variant: ButtonVariant::Outline,
                                    onclick: {
                                        let role = role.clone();
                                        move |_| start_edit(&role)
                                    },
                                    "Edit"
                                }
                                Button {
                                    size: ButtonSize::Small,
                                    variant: ButtonVariant::Destructive,
                                    onclick: {
                                        let role = role.clone();
                                        move |_| pending_delete.set(Some(role.clone()))
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }

            ConfirmDelete {
                open: pending_delete.read().is_some(),
                on_open_change: move |open: bool| {
                    if !open {
                        pending_delete.set(None);
                    }
                },
                title: delete_title,
                description: "Users holding this role lose its permissions.",
                busy: deleting(),
                on_confirm: confirm_delete,
            }
        }
    }
}

/// Create a role and choose its permissions.
#[component]
pub fn RoleCreatePage() -> Element {
    let toast = use_toast();
    let mut draft = use_signal(|| RoleRequest::new("", []));
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let handle_submit = move |_: FormEvent| async move {
        let req = draft.read().clone();
        if let Err(err) = req.validate_request() {
            errors.set(report_invalid(toast, err));
            return;
        }
        errors.set(HashMap::new());
        saving.set(true);
        match server::api::create_role(req).await {
            Ok(resp) => {
                tracing::info!(msg = %resp.msg, "Role created");
                let msg = if resp.msg.is_empty() { ROLE_CREATED_MSG.to_string() } else { resp.msg };
                toast.success(msg, ToastOptions::new());
                draft.set(RoleRequest::new("", []));
                navigator().push(Route::AdminRoles {});
            }
            Err(e) => {
                errors.set(field_errors(&e));
                report_failure(toast, "create role", &e);
            }
        }
        saving.set(false);
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Create Role" }
            }
            Card {
                CardHeader {
                    CardTitle { "Role details" }
                    CardDescription { "Grant at least one permission" }
                }
                CardContent {
                    Form { onsubmit: handle_submit,
                        PermissionFields { draft, errors: errors() }
                        Button { button_type: "submit", loading: saving(), "Create Role" }
                    }
                }
            }
        }
    }
}
