use dioxus::prelude::*;
use shared_ui::{
    Button, Card, CardContent, CardHeader, CardTitle, DetailItem, DetailList, ErrorState,
    PageActions, PageHeader, PageSubtitle, PageTitle, Skeleton, UserAvatar,
};

use super::use_profile;
use crate::auth::use_auth;
use crate::format_helpers::format_date_human;
use crate::routes::Route;

/// Read-only profile of the signed-in teacher or student.
#[component]
pub fn ProfilePage(edit: Route) -> Element {
    let auth = use_auth();
    let mut profile = use_profile();
    let initials = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.initials())
        .unwrap_or_default();

    let body = match &*profile.read() {
        None => rsx! {
            Skeleton { class: "profile-skeleton" }
        },
        Some(Err(message)) => rsx! {
            ErrorState {
                message: message.clone(),
                on_retry: move |_| profile.restart(),
            }
        },
        Some(Ok(data)) => {
            let p = data.profile.clone();
            rsx! {
                div { class: "profile-heading",
                    UserAvatar { initials: initials.clone(), photo_url: p.photo.clone() }
                    div {
                        h2 { "{p.name}" }
                        p { class: "muted", "{data.role.label()} · {p.email}" }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle { "Contact" }
                    }
                    CardContent {
                        DetailList {
                            DetailItem { label: "Address", value: p.address.clone() }
                            DetailItem { label: "Phone", value: p.phone_no.clone() }
                            DetailItem { label: "Date of birth", value: format_date_human(&p.dob) }
                        }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle { "Family" }
                    }
                    CardContent {
                        DetailList {
                            DetailItem { label: "Father", value: p.father_name.clone() }
                            DetailItem { label: "Mother", value: p.mother_name.clone() }
                            DetailItem { label: "Parents' phone", value: p.parents_phone_no.clone() }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "My Profile" }
                PageSubtitle { "Details the school holds about you" }
                PageActions {
                    Button {
                        onclick: move |_| { navigator().push(edit.clone()); },
                        "Edit Profile"
                    }
                }
            }
            {body}
        }
    }
}
