use dioxus::prelude::*;
use shared_types::{CreateUserRequest, UserRole, ValidateRequest};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, DataTableCell,
    DataTableRow, Form, FormRow, FormSelect, Input, PageActions, PageHeader, PageSubtitle,
    PageTitle, ToastOptions,
};
use std::collections::HashMap;

use super::list_table::{ListTable, ListView};
use super::Route;
use crate::feedback::{field_errors, report_failure, report_invalid, use_list};
use crate::search::use_search_query;

fn role_badge(role: UserRole) -> BadgeVariant {
    match role {
        UserRole::Admin => BadgeVariant::Primary,
        UserRole::Teacher => BadgeVariant::Secondary,
        UserRole::Student => BadgeVariant::Outline,
        UserRole::Unassigned => BadgeVariant::Warning,
    }
}

/// Teachers and students registered with the school.
#[component]
pub fn UserListPage() -> Element {
    let query = use_search_query();
    let mut users = use_list("load users", server::api::list_users);

    let rows = users.rows.read().filtered(&query.get());
    let view = ListView::of(&*users.rows.read(), rows.len());
    let total = users.rows.read().len();

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Users" }
                PageSubtitle { "{total} accounts" }
                PageActions {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| { navigator().push(Route::AdminUserCreate {}); },
                        "Create User"
                    }
                }
            }

            ListTable {
                columns: vec!["ID", "Name", "Email", "Role"],
                view,
                empty: "No users match",
                on_retry: move |_| users.reload(),
                for user in rows {
                    DataTableRow { key: "{user.id}",
                        DataTableCell { "{user.id}" }
                        DataTableCell { "{user.name}" }
                        DataTableCell { "{user.email}" }
                        DataTableCell {
                            Badge { variant: role_badge(user.role()), "{user.role().label()}" }
                        }
                    }
                }
            }
        }
    }
}

/// Register a teacher or student account.
#[component]
pub fn UserCreatePage() -> Element {
    let toast = use_toast();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| UserRole::Student);
    let mut errors = use_signal(HashMap::<String, String>::new);
    let mut saving = use_signal(|| false);

    let handle_submit = move |_: FormEvent| async move {
        let req = CreateUserRequest::new(&name(), &email(), &password(), role());
        if let Err(err) = req.validate_request() {
            errors.set(report_invalid(toast, err));
            return;
        }
        errors.set(HashMap::new());
        saving.set(true);
        match server::api::create_user(req).await {
            Ok(resp) => {
                let msg = if resp.msg.is_empty() { "User created".to_string() } else { resp.msg };
                toast.success(msg, ToastOptions::new());
                navigator().push(Route::AdminUsers {});
            }
            Err(e) => {
                errors.set(field_errors(&e));
                report_failure(toast, "create user", &e);
            }
        }
        saving.set(false);
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Create User" }
                PageSubtitle { "New accounts sign in with the email and password set here" }
            }
            Card {
                CardContent {
                    Form { onsubmit: handle_submit,
                        FormRow {
                            Input {
                                label: "Full name",
                                required: true,
                                value: name(),
                                on_input: move |e: FormEvent| name.set(e.value()),
                                error: errors.read().get("name").cloned(),
                            }
                            Input {
                                label: "Email",
                                input_type: "email",
                                required: true,
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                                error: errors.read().get("email").cloned(),
                            }
                        }
                        FormRow {
                            Input {
                                label: "Password",
                                input_type: "password",
                                required: true,
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                                error: errors.read().get("password").cloned(),
                            }
                            FormSelect {
                                label: "Role",
                                value: role().as_str(),
                                onchange: move |e: FormEvent| role.set(UserRole::from_str_or_default(&e.value())),
                                error: errors.read().get("role_id").cloned(),
                                option { value: "student", "Student" }
                                option { value: "teacher", "Teacher" }
                                option { value: "admin", "Admin" }
                            }
                        }
                        Button {
                            button_type: "submit",
                            loading: saving(),
                            "Create User"
                        }
                    }
                }
            }
        }
    }
}
