pub mod admin;
pub mod assignments;
pub mod attendance;
pub mod complaints;
pub mod dashboard;
pub mod layout;
pub mod list_table;
pub mod login;
pub mod nav;
pub mod not_found;
pub mod notices;
pub mod profile;
pub mod qna;
pub mod roles;
pub mod student;
pub mod teacher;
pub mod users;

use crate::auth::{guard_decision, use_auth, GuardDecision, RouteSection};
use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

use admin::*;
use layout::AppLayout;
use login::Login;
use not_found::NotFound;
use student::*;
use teacher::*;

/// Application routes. Each role owns a nested route set; the section
/// layouts send users of other roles back to their own home.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
        #[route("/")]
        Home {},
        #[layout(AppLayout)]
            // ── Admin ──
            #[nest("/admin")]
            #[layout(AdminSection)]
                #[route("/")]
                AdminDashboard {},
                #[route("/users")]
                AdminUsers {},
                #[route("/users/new")]
                AdminUserCreate {},
                #[route("/roles")]
                AdminRoles {},
                #[route("/roles/new")]
                AdminRoleCreate {},
                #[route("/complaints")]
                AdminComplaints {},
                #[route("/notices")]
                AdminNotices {},
                #[route("/attendance")]
                AdminAttendance {},
                #[route("/assignments")]
                AdminAssignments {},
                #[route("/assignments/new")]
                AdminAssignmentCreate {},
                #[route("/qna")]
                AdminQna {},
                #[route("/qna/new")]
                AdminQnaCreate {},
            #[end_layout]
            #[end_nest]
            // ── Teacher ──
            #[nest("/teacher")]
            #[layout(TeacherSection)]
                #[route("/")]
                TeacherProfile {},
                #[route("/profile/edit")]
                TeacherProfileEdit {},
                #[route("/complaints")]
                TeacherComplaints {},
                #[route("/complaints/new")]
                TeacherComplaintCreate {},
                #[route("/notices")]
                TeacherNotices {},
                #[route("/assignments")]
                TeacherAssignments {},
                #[route("/assignments/new")]
                TeacherAssignmentCreate {},
                #[route("/attendance")]
                TeacherAttendance {},
                #[route("/attendance/new")]
                TeacherAttendanceTake {},
                #[route("/qna")]
                TeacherQna {},
                #[route("/qna/new")]
                TeacherQnaAsk {},
            #[end_layout]
            #[end_nest]
            // ── Student ──
            #[nest("/student")]
            #[layout(StudentSection)]
                #[route("/")]
                StudentProfile {},
                #[route("/profile/edit")]
                StudentProfileEdit {},
                #[route("/complaints")]
                StudentComplaints {},
                #[route("/complaints/new")]
                StudentComplaintCreate {},
                #[route("/notices")]
                StudentNotices {},
                #[route("/assignments")]
                StudentAssignments {},
                #[route("/attendance")]
                StudentAttendance {},
                #[route("/qna")]
                StudentQna {},
                #[route("/qna/new")]
                StudentQnaAsk {},
            #[end_layout]
            #[end_nest]
        #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// The dashboard a route belongs to, by URL prefix. Public and shared
    /// routes have none.
    pub fn section(&self) -> Option<RouteSection> {
        let path = self.to_string();
        let first = path.trim_start_matches('/').split(['/', '?']).next()?;
        match first {
            "admin" => Some(RouteSection::Admin),
            "teacher" => Some(RouteSection::Teacher),
            "student" => Some(RouteSection::Student),
            _ => None,
        }
    }
}

/// Landing route of each dashboard.
pub fn home_for(section: RouteSection) -> Route {
    match section {
        RouteSection::Admin => Route::AdminDashboard {},
        RouteSection::Teacher => Route::TeacherProfile {},
        RouteSection::Student => Route::StudentProfile {},
    }
}

#[component]
fn RedirectNotice(message: &'static str) -> Element {
    rsx! {
        div { class: "auth-guard-loading",
            p { "{message}" }
        }
    }
}

/// Auth guard layout. Resolves the session user on the server and sends
/// anonymous visitors to /login.
///
/// Uses `use_server_future` with `?` so the `SuspenseBoundary` in `App`
/// shows a spinner while the session is resolved.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();

    let resource =
        use_server_future(move || async move { server::api::get_current_user().await })?;

    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(user)) => {
            if *auth.current_user.peek() != user {
                match user.clone() {
                    Some(user) => auth.set_user(user),
                    None => auth.clear_auth(),
                }
            }
            match guard_decision(user.as_ref(), None) {
                GuardDecision::Login => {
                    navigator().replace(Route::Login {});
                    rsx! { RedirectNotice { message: "Redirecting to login..." } }
                }
                GuardDecision::NoDashboard => rsx! { NoDashboard {} },
                _ => rsx! { Outlet::<Route> {} },
            }
        }
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Could not resolve session user");
            auth.clear_auth();
            navigator().replace(Route::Login {});
            rsx! { RedirectNotice { message: "Redirecting to login..." } }
        }
        None => rsx! { RedirectNotice { message: "Loading..." } },
    }
}

/// `/` sends the user to their dashboard's home.
#[component]
fn Home() -> Element {
    let auth = use_auth();
    let section = auth
        .current_user
        .read()
        .as_ref()
        .and_then(|u| RouteSection::for_role(u.role));

    match section {
        Some(section) => {
            navigator().replace(home_for(section));
            rsx! { RedirectNotice { message: "Opening your dashboard..." } }
        }
        None => rsx! { NoDashboard {} },
    }
}

/// Shared body of the three section layouts.
fn section_gate(section: RouteSection) -> Element {
    let auth = use_auth();
    let decision = guard_decision(auth.current_user.read().as_ref(), Some(section));

    match decision {
        GuardDecision::Allow => rsx! { Outlet::<Route> {} },
        GuardDecision::Redirect(home) => {
            tracing::info!(from = section.label(), to = home.label(), "Redirecting to own dashboard");
            navigator().replace(home_for(home));
            rsx! { RedirectNotice { message: "Redirecting..." } }
        }
        GuardDecision::Login => {
            navigator().replace(Route::Login {});
            rsx! { RedirectNotice { message: "Redirecting to login..." } }
        }
        GuardDecision::NoDashboard => rsx! { NoDashboard {} },
    }
}

#[component]
fn AdminSection() -> Element {
    section_gate(RouteSection::Admin)
}

#[component]
fn TeacherSection() -> Element {
    section_gate(RouteSection::Teacher)
}

#[component]
fn StudentSection() -> Element {
    section_gate(RouteSection::Student)
}

/// Shown to signed-in accounts whose role has no dashboard.
#[component]
fn NoDashboard() -> Element {
    let mut auth = use_auth();
    let mut signing_out = use_signal(|| false);

    rsx! {
        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "No dashboard for this account" }
                    CardDescription {
                        "Your account has not been given a role yet. Ask an administrator to assign one, then sign in again."
                    }
                }
                CardContent {
                    Button {
                        variant: ButtonVariant::Outline,
                        loading: signing_out(),
                        onclick: move |_| {
                            signing_out.set(true);
                            spawn(async move {
                                if let Err(e) = server::api::logout().await {
                                    tracing::warn!(error = %e, "Logout failed");
                                }
                                auth.clear_auth();
                                signing_out.set(false);
                                navigator().replace(Route::Login {});
                            });
                        },
                        "Sign out"
                    }
                }
            }
        }
    }
}
