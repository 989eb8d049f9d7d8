use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSearch;
use dioxus_free_icons::Icon;
use shared_types::{FeatureFlags, UserRole};
use shared_ui::{
    DropdownMenu, DropdownMenuContent, DropdownMenuItem, DropdownMenuLabel, DropdownMenuSeparator,
    DropdownMenuTrigger, Sidebar, SidebarContent, SidebarFooter, SidebarGroup, SidebarHeader,
    SidebarInset, SidebarMenuButton, SidebarProvider, SidebarTrigger, UserAvatar,
};

use super::nav::{nav_for, page_title};
use super::Route;
use crate::auth::{use_auth, RouteSection};
use crate::search::use_search_query;

/// Main app layout with the role's sidebar and the top bar.
#[component]
pub fn AppLayout() -> Element {
    let route: Route = use_route();
    let flags: FeatureFlags = use_context();
    let mut auth = use_auth();
    let mut search = use_search_query();

    let user = auth.current_user.read().clone();
    let section = user
        .as_ref()
        .and_then(|u| RouteSection::for_role(u.role))
        .or(route.section());
    let groups = section.map(|s| nav_for(s, &flags)).unwrap_or_default();
    let title = page_title(&route, &flags);

    let (name, initials, photo_url, role) = match &user {
        Some(u) => (u.name.clone(), u.initials(), u.photo_url.clone(), u.role),
        None => (String::new(), String::new(), None, UserRole::Unassigned),
    };
    let has_profile = matches!(role, UserRole::Teacher | UserRole::Student);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "School Admin" }
                        if let Some(section) = section {
                            span { class: "sidebar-brand-role", "{section.label()}" }
                        }
                    }
                }

                SidebarContent {
                    for group in groups {
                        SidebarGroup { key: "{group.label}", label: group.label.to_string(),
                            for entry in group.items {
                                SidebarMenuButton {
                                    key: "{entry.label}",
                                    active: entry.route == route,
                                    onclick: {
                                        let target = entry.route.clone();
                                        move |_| {
                                            search.clear();
                                            navigator().push(target.clone());
                                        }
                                    },
                                    if let Some(icon) = entry.icon {
                                        {icon.render()}
                                    }
                                    span { "{entry.label}" }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    span { class: "sidebar-footer-label", "{name}" }
                }
            }

            SidebarInset {
                header { class: "topbar",
                    SidebarTrigger {
                        span { class: "topbar-trigger-icon", "\u{2630}" }
                    }
                    span { class: "topbar-title", "{title}" }

                    div { class: "topbar-search", role: "search",
                        Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                        input {
                            r#type: "search",
                            placeholder: "Search this page...",
                            "aria-label": "Search rows on this page",
                            value: search.get(),
                            oninput: move |evt: FormEvent| search.set(evt.value()),
                        }
                    }

                    DropdownMenu {
                        DropdownMenuTrigger {
                            UserAvatar { initials: initials.clone(), photo_url: photo_url.clone() }
                        }
                        DropdownMenuContent {
                            DropdownMenuLabel {
                                span { class: "topbar-user-name", "{name}" }
                                span { class: "topbar-user-role", "{role.label()}" }
                            }
                            DropdownMenuSeparator {}
                            if has_profile {
                                DropdownMenuItem::<String> {
                                    value: "profile".to_string(),
                                    index: 0usize,
                                    on_select: move |_: String| {
                                        let target = if role == UserRole::Teacher {
                                            Route::TeacherProfile {}
                                        } else {
                                            Route::StudentProfile {}
                                        };
                                        navigator().push(target);
                                    },
                                    "View Profile"
                                }
                                DropdownMenuItem::<String> {
                                    value: "edit-profile".to_string(),
                                    index: 1usize,
                                    on_select: move |_: String| {
                                        let target = if role == UserRole::Teacher {
                                            Route::TeacherProfileEdit {}
                                        } else {
                                            Route::StudentProfileEdit {}
                                        };
                                        navigator().push(target);
                                    },
                                    "Edit Profile"
                                }
                                DropdownMenuSeparator {}
                            }
                            DropdownMenuItem::<String> {
                                value: "logout".to_string(),
                                index: 2usize,
                                on_select: move |_: String| {
                                    spawn(async move {
                                        if let Err(e) = server::api::logout().await {
                                            tracing::warn!(error = %e, "Logout failed");
                                        }
                                    });
                                    auth.clear_auth();
                                    search.clear();
                                    navigator().push(Route::Login {});
                                },
                                "Sign Out"
                            }
                        }
                    }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
