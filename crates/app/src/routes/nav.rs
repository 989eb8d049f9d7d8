use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdBriefcase, LdCalendar, LdClock, LdFileText, LdLayoutDashboard,
    LdSettings, LdShield, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::FeatureFlags;

use super::Route;
use crate::auth::RouteSection;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavIcon {
    Dashboard,
    Users,
    Roles,
    Complaints,
    Notices,
    Attendance,
    TakeAttendance,
    Assignments,
    Community,
    Profile,
    EditProfile,
}

impl NavIcon {
    pub fn render(self) -> Element {
        match self {
            NavIcon::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
            NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
            NavIcon::Roles => rsx! { Icon::<LdShield> { icon: LdShield, width: 18, height: 18 } },
            NavIcon::Complaints => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
            NavIcon::Notices => rsx! { Icon::<LdBell> { icon: LdBell, width: 18, height: 18 } },
            NavIcon::Attendance => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
            NavIcon::TakeAttendance => rsx! { Icon::<LdClock> { icon: LdClock, width: 18, height: 18 } },
            NavIcon::Assignments => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 } },
            NavIcon::Community => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 18, height: 18 } },
            NavIcon::Profile => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
            NavIcon::EditProfile => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Route,
    pub icon: Option<NavIcon>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavGroup {
    pub label: &'static str,
    pub items: Vec<NavItem>,
}

fn item(label: &'static str, route: Route, icon: NavIcon) -> NavItem {
    NavItem {
        label,
        route,
        icon: Some(icon),
    }
}

fn plain(label: &'static str, route: Route) -> NavItem {
    NavItem {
        label,
        route,
        icon: None,
    }
}

/// Sidebar groups for one dashboard. The community group is left out when
/// the Q&A board is switched off.
pub fn nav_for(section: RouteSection, flags: &FeatureFlags) -> Vec<NavGroup> {
    let mut groups = match section {
        RouteSection::Admin => vec![
            NavGroup {
                label: "Overview",
                items: vec![item("Dashboard", Route::AdminDashboard {}, NavIcon::Dashboard)],
            },
            NavGroup {
                label: "People",
                items: vec![
                    item("Users", Route::AdminUsers {}, NavIcon::Users),
                    plain("Create User", Route::AdminUserCreate {}),
                    item("Roles", Route::AdminRoles {}, NavIcon::Roles),
                    plain("Create Role", Route::AdminRoleCreate {}),
                ],
            },
            NavGroup {
                label: "School",
                items: vec![
                    item("Complaints", Route::AdminComplaints {}, NavIcon::Complaints),
                    item("Notices", Route::AdminNotices {}, NavIcon::Notices),
                    item("Attendance", Route::AdminAttendance {}, NavIcon::Attendance),
                    item("Assignments", Route::AdminAssignments {}, NavIcon::Assignments),
                    plain("Create Assignment", Route::AdminAssignmentCreate {}),
                ],
            },
        ],
        RouteSection::Teacher => vec![
            NavGroup {
                label: "Account",
                items: vec![
                    item("Profile", Route::TeacherProfile {}, NavIcon::Profile),
                    item("Edit Profile", Route::TeacherProfileEdit {}, NavIcon::EditProfile),
                ],
            },
            NavGroup {
                label: "Complaints",
                items: vec![
                    item("My Complaints", Route::TeacherComplaints {}, NavIcon::Complaints),
                    plain("New Complaint", Route::TeacherComplaintCreate {}),
                ],
            },
            NavGroup {
                label: "Classes",
                items: vec![
                    item("Notices", Route::TeacherNotices {}, NavIcon::Notices),
                    item("Assignments", Route::TeacherAssignments {}, NavIcon::Assignments),
                    plain("Create Assignment", Route::TeacherAssignmentCreate {}),
                    item("Take Attendance", Route::TeacherAttendanceTake {}, NavIcon::TakeAttendance),
                    item("Attendance by Subject", Route::TeacherAttendance {}, NavIcon::Attendance),
                ],
            },
        ],
        RouteSection::Student => vec![
            NavGroup {
                label: "Account",
                items: vec![
                    item("Profile", Route::StudentProfile {}, NavIcon::Profile),
                    item("Edit Profile", Route::StudentProfileEdit {}, NavIcon::EditProfile),
                ],
            },
            NavGroup {
                label: "Complaints",
                items: vec![
                    item("My Complaints", Route::StudentComplaints {}, NavIcon::Complaints),
                    plain("New Complaint", Route::StudentComplaintCreate {}),
                ],
            },
            NavGroup {
                label: "Classes",
                items: vec![
                    item("Notices", Route::StudentNotices {}, NavIcon::Notices),
                    item("Assignments", Route::StudentAssignments {}, NavIcon::Assignments),
                    item("My Attendance", Route::StudentAttendance {}, NavIcon::Attendance),
                ],
            },
        ],
    };

    if flags.community {
        let (board, ask, ask_label) = match section {
            RouteSection::Admin => (Route::AdminQna {}, Route::AdminQnaCreate {}, "Add Q&A"),
            RouteSection::Teacher => (Route::TeacherQna {}, Route::TeacherQnaAsk {}, "Ask a Question"),
            RouteSection::Student => (Route::StudentQna {}, Route::StudentQnaAsk {}, "Ask a Question"),
        };
        groups.push(NavGroup {
            label: "Community",
            items: vec![item("Q&A Board", board, NavIcon::Community), plain(ask_label, ask)],
        });
    }

    groups
}

/// Top bar title for the current route.
pub fn page_title(route: &Route, flags: &FeatureFlags) -> &'static str {
    let Some(section) = route.section() else {
        return "";
    };
    nav_for(section, flags)
        .iter()
        .flat_map(|group| group.items.iter())
        .find(|item| &item.route == route)
        .map(|item| item.label)
        .unwrap_or(section.label())
}
