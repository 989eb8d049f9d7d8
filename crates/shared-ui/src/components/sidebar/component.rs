use dioxus::prelude::*;

// ─── Context ───────────────────────────────────────────────────────────

/// Shared state for controlling sidebar open/closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
}

/// Provides sidebar state context to children.
#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let state = use_signal(|| SidebarState { open: default_open });
    use_context_provider(|| state);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if (state)().open { "true" } else { "false" },
            {children}
        }
    }
}

fn use_sidebar() -> Signal<SidebarState> {
    use_context::<Signal<SidebarState>>()
}

// ─── Layout ────────────────────────────────────────────────────────────

/// The navigation column. On narrow viewports a backdrop closes it.
#[component]
pub fn Sidebar(children: Element) -> Element {
    let mut state = use_sidebar();
    let is_open = (state)().open;

    rsx! {
        if is_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| state.set(SidebarState { open: false }),
            }
        }
        aside {
            class: "sidebar",
            "data-state": if is_open { "open" } else { "closed" },
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        nav { class: "sidebar-content", {children} }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

/// The page area next to the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "sidebar-inset", {children} }
    }
}

// ─── Groups and menus ──────────────────────────────────────────────────

/// A titled group of links. Collapsible groups toggle when the title is
/// clicked; `default_open` controls the first render.
#[component]
pub fn SidebarGroup(
    label: String,
    #[props(default = false)] collapsible: bool,
    #[props(default = true)] default_open: bool,
    children: Element,
) -> Element {
    let mut expanded = use_signal(|| default_open);
    let show = !collapsible || expanded();

    rsx! {
        div { class: "sidebar-group", "data-open": if show { "true" } else { "false" },
            if collapsible {
                button {
                    r#type: "button",
                    class: "sidebar-group-label",
                    "aria-expanded": if show { "true" } else { "false" },
                    onclick: move |_| expanded.toggle(),
                    "{label}"
                    span { class: "sidebar-group-caret", if show { "▾" } else { "▸" } }
                }
            } else {
                div { class: "sidebar-group-label", "{label}" }
            }
            if show {
                ul { class: "sidebar-menu", {children} }
            }
        }
    }
}

/// One navigation entry. Clicking closes the overlay sidebar on narrow
/// viewports; wide layouts keep it pinned regardless of state.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let mut state = use_sidebar();

    rsx! {
        li { class: "sidebar-menu-item",
            button {
                r#type: "button",
                class: "sidebar-menu-button",
                "data-active": if active { "true" } else { "false" },
                "aria-current": if active { "page" } else { "false" },
                onclick: move |evt| {
                    onclick.call(evt);
                    state.set(SidebarState { open: false });
                },
                {children}
            }
        }
    }
}

/// Toggle button that opens/closes the sidebar.
#[component]
pub fn SidebarTrigger(children: Element) -> Element {
    let mut state = use_sidebar();

    rsx! {
        button {
            r#type: "button",
            class: "sidebar-trigger",
            "aria-label": "Toggle sidebar",
            onclick: move |_| {
                let current = (state)().open;
                state.set(SidebarState { open: !current });
            },
            {children}
        }
    }
}

