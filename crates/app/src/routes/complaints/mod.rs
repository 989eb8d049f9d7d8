mod all;
mod create;
mod mine;

pub use all::AllComplaintsPage;
pub use create::ComplaintCreatePage;
pub use mine::MyComplaintsPage;

use shared_types::Complaint;
use shared_ui::BadgeVariant;

fn status_variant(complaint: &Complaint) -> BadgeVariant {
    if complaint.solved {
        BadgeVariant::Success
    } else {
        BadgeVariant::Warning
    }
}
