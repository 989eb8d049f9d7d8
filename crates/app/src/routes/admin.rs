//! Admin route targets. Each wraps a shared page with admin capabilities.

use dioxus::prelude::*;
use shared_types::AttendanceFilter;

use super::assignments::{AssignmentCreatePage, AssignmentListPage};
use super::attendance::AttendanceLookupPage;
use super::complaints::AllComplaintsPage;
use super::dashboard::DashboardPage;
use super::notices::NoticeBoardPage;
use super::qna::{AskQuestionPage, QnaBoardPage};
use super::roles::{RoleCreatePage, RoleListPage};
use super::users::{UserCreatePage, UserListPage};
use super::Route;

#[component]
pub fn AdminDashboard() -> Element {
    rsx! { DashboardPage {} }
}

#[component]
pub fn AdminUsers() -> Element {
    rsx! { UserListPage {} }
}

#[component]
pub fn AdminUserCreate() -> Element {
    rsx! { UserCreatePage {} }
}

#[component]
pub fn AdminRoles() -> Element {
    rsx! { RoleListPage {} }
}

#[component]
pub fn AdminRoleCreate() -> Element {
    rsx! { RoleCreatePage {} }
}

#[component]
pub fn AdminComplaints() -> Element {
    rsx! { AllComplaintsPage {} }
}

#[component]
pub fn AdminNotices() -> Element {
    rsx! { NoticeBoardPage { can_manage: true } }
}

#[component]
pub fn AdminAttendance() -> Element {
    rsx! {
        AttendanceLookupPage {
            filters: vec![
                AttendanceFilter::All,
                AttendanceFilter::User,
                AttendanceFilter::Subject,
                AttendanceFilter::Date,
                AttendanceFilter::UserAndSubject,
            ],
            can_delete: true,
        }
    }
}

#[component]
pub fn AdminAssignments() -> Element {
    rsx! { AssignmentListPage { create: Route::AdminAssignmentCreate {} } }
}

#[component]
pub fn AdminAssignmentCreate() -> Element {
    rsx! { AssignmentCreatePage { back: Route::AdminAssignments {} } }
}

#[component]
pub fn AdminQna() -> Element {
    rsx! { QnaBoardPage { ask: Route::AdminQnaCreate {}, can_delete: true } }
}

#[component]
pub fn AdminQnaCreate() -> Element {
    rsx! { AskQuestionPage { back: Route::AdminQna {}, with_answer: true } }
}
