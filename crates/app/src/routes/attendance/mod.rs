mod lookup;
mod mine;
mod take;

pub use lookup::AttendanceLookupPage;
pub use mine::MyAttendancePage;
pub use take::TakeAttendancePage;

use shared_types::{AttendanceFilter, AttendanceStatus};
use shared_ui::BadgeVariant;

pub(crate) fn filter_label(filter: AttendanceFilter) -> &'static str {
    match filter {
        AttendanceFilter::All => "All records",
        AttendanceFilter::User => "By user",
        AttendanceFilter::Subject => "By subject",
        AttendanceFilter::Date => "By date",
        AttendanceFilter::UserAndSubject => "By user and subject",
    }
}

pub(crate) fn filter_key(filter: AttendanceFilter) -> &'static str {
    match filter {
        AttendanceFilter::All => "all",
        AttendanceFilter::User => "user",
        AttendanceFilter::Subject => "subject",
        AttendanceFilter::Date => "date",
        AttendanceFilter::UserAndSubject => "user-subject",
    }
}

pub(crate) fn filter_from_key(key: &str) -> AttendanceFilter {
    match key {
        "user" => AttendanceFilter::User,
        "subject" => AttendanceFilter::Subject,
        "date" => AttendanceFilter::Date,
        "user-subject" => AttendanceFilter::UserAndSubject,
        _ => AttendanceFilter::All,
    }
}

pub(crate) fn status_variant(status: AttendanceStatus) -> BadgeVariant {
    if status.is_present() {
        BadgeVariant::Success
    } else {
        BadgeVariant::Destructive
    }
}
