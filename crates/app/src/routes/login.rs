use crate::auth::{use_auth, RouteSection};
use crate::routes::{home_for, Route};
use dioxus::prelude::*;
use shared_types::{AppError, AuthUser, LoginRequest, ValidateRequest};
use shared_ui::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Form, FormError, Input};
use std::collections::HashMap;

/// Where a freshly signed-in user lands.
fn destination(user: &AuthUser) -> Route {
    match RouteSection::for_role(user.role) {
        Some(section) => home_for(section),
        None => Route::Home {},
    }
}

/// Email and password sign-in.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    if let Some(user) = auth.current_user.read().as_ref() {
        navigator().replace(destination(user));
    }

    let handle_login = move |_: FormEvent| async move {
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let request = LoginRequest {
            email: email().trim().to_string(),
            password: password(),
        };
        if let Err(err) = request.validate_request() {
            field_errors.set(err.field_errors);
            return;
        }

        loading.set(true);
        match server::api::login(request.email, request.password).await {
            Ok(user) => {
                tracing::info!(role = user.role.as_str(), "Signed in");
                let target = destination(&user);
                auth.set_user(user);
                navigator().replace(target);
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    error_msg.set(Some(AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fe);
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Use the email and password issued by your school" }
                }

                CardContent {
                    FormError { message: error_msg() }

                    Form { onsubmit: handle_login,
                        Input {
                            label: "Email",
                            input_type: "email",
                            name: "email",
                            placeholder: "you@school.edu",
                            required: true,
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                            error: field_errors.read().get("email").cloned(),
                        }
                        Input {
                            label: "Password",
                            input_type: "password",
                            name: "password",
                            required: true,
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                            error: field_errors.read().get("password").cloned(),
                        }
                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            loading: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }
            }
        }
    }
}
