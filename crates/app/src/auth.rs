use dioxus::prelude::*;
use shared_types::{AuthUser, UserRole};

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Id of the signed-in user, or 0 before the guard has resolved.
pub fn use_user_id() -> i64 {
    let auth = use_auth();
    let id = auth.current_user.read().as_ref().map(|u| u.id).unwrap_or(0);
    id
}

/// The three dashboards. Each owns a URL prefix and a route set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteSection {
    Admin,
    Teacher,
    Student,
}

impl RouteSection {
    /// Dashboard for a role; `Unassigned` has none.
    pub fn for_role(role: UserRole) -> Option<Self> {
        match role {
            UserRole::Admin => Some(RouteSection::Admin),
            UserRole::Teacher => Some(RouteSection::Teacher),
            UserRole::Student => Some(RouteSection::Student),
            UserRole::Unassigned => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RouteSection::Admin => "Admin",
            RouteSection::Teacher => "Teacher",
            RouteSection::Student => "Student",
        }
    }
}

/// What a guard does with the current user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested route.
    Allow,
    /// Nobody is signed in.
    Login,
    /// Signed in, but the role has no dashboard.
    NoDashboard,
    /// Signed in to a different dashboard; send them to its home.
    Redirect(RouteSection),
}

/// Decide access for `user` to a route in `section`. `None` means the route
/// only requires a signed-in user with some dashboard.
pub fn guard_decision(user: Option<&AuthUser>, section: Option<RouteSection>) -> GuardDecision {
    let Some(user) = user else {
        return GuardDecision::Login;
    };
    let Some(home) = RouteSection::for_role(user.role) else {
        return GuardDecision::NoDashboard;
    };
    match section {
        Some(required) if required != home => GuardDecision::Redirect(home),
        _ => GuardDecision::Allow,
    }
}
