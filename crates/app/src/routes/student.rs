//! Student route targets. Students read notices and assignments but do not
//! post them.

use dioxus::prelude::*;

use super::assignments::AssignmentListPage;
use super::attendance::MyAttendancePage;
use super::complaints::{ComplaintCreatePage, MyComplaintsPage};
use super::notices::NoticeBoardPage;
use super::profile::{EditProfilePage, ProfilePage};
use super::qna::{AskQuestionPage, QnaBoardPage};
use super::Route;

#[component]
pub fn StudentProfile() -> Element {
    rsx! { ProfilePage { edit: Route::StudentProfileEdit {} } }
}

#[component]
pub fn StudentProfileEdit() -> Element {
    rsx! { EditProfilePage { back: Route::StudentProfile {} } }
}

#[component]
pub fn StudentComplaints() -> Element {
    rsx! { MyComplaintsPage { create: Route::StudentComplaintCreate {} } }
}

#[component]
pub fn StudentComplaintCreate() -> Element {
    rsx! { ComplaintCreatePage { back: Route::StudentComplaints {} } }
}

#[component]
pub fn StudentNotices() -> Element {
    rsx! { NoticeBoardPage {} }
}

#[component]
pub fn StudentAssignments() -> Element {
    rsx! { AssignmentListPage {} }
}

#[component]
pub fn StudentAttendance() -> Element {
    rsx! { MyAttendancePage {} }
}

#[component]
pub fn StudentQna() -> Element {
    rsx! { QnaBoardPage { ask: Route::StudentQnaAsk {} } }
}

#[component]
pub fn StudentQnaAsk() -> Element {
    rsx! { AskQuestionPage { back: Route::StudentQna {} } }
}
