//! Teacher route targets.

use dioxus::prelude::*;
use shared_types::AttendanceFilter;

use super::assignments::{AssignmentCreatePage, AssignmentListPage};
use super::attendance::{AttendanceLookupPage, TakeAttendancePage};
use super::complaints::{ComplaintCreatePage, MyComplaintsPage};
use super::notices::NoticeBoardPage;
use super::profile::{EditProfilePage, ProfilePage};
use super::qna::{AskQuestionPage, QnaBoardPage};
use super::Route;

#[component]
pub fn TeacherProfile() -> Element {
    rsx! { ProfilePage { edit: Route::TeacherProfileEdit {} } }
}

#[component]
pub fn TeacherProfileEdit() -> Element {
    rsx! { EditProfilePage { back: Route::TeacherProfile {} } }
}

#[component]
pub fn TeacherComplaints() -> Element {
    rsx! { MyComplaintsPage { create: Route::TeacherComplaintCreate {} } }
}

#[component]
pub fn TeacherComplaintCreate() -> Element {
    rsx! { ComplaintCreatePage { back: Route::TeacherComplaints {} } }
}

#[component]
pub fn TeacherNotices() -> Element {
    rsx! { NoticeBoardPage {} }
}

#[component]
pub fn TeacherAssignments() -> Element {
    rsx! { AssignmentListPage { create: Route::TeacherAssignmentCreate {} } }
}

#[component]
pub fn TeacherAssignmentCreate() -> Element {
    rsx! { AssignmentCreatePage { back: Route::TeacherAssignments {} } }
}

/// Attendance by subject, with a link to take a new sheet.
#[component]
pub fn TeacherAttendance() -> Element {
    rsx! {
        AttendanceLookupPage {
            filters: vec![
                AttendanceFilter::Subject,
                AttendanceFilter::Date,
                AttendanceFilter::UserAndSubject,
            ],
            take: Route::TeacherAttendanceTake {},
        }
    }
}

#[component]
pub fn TeacherAttendanceTake() -> Element {
    rsx! { TakeAttendancePage { back: Route::TeacherAttendance {} } }
}

#[component]
pub fn TeacherQna() -> Element {
    rsx! { QnaBoardPage { ask: Route::TeacherQnaAsk {} } }
}

#[component]
pub fn TeacherQnaAsk() -> Element {
    rsx! { AskQuestionPage { back: Route::TeacherQna {} } }
}
