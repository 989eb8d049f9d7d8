mod edit;
mod view;

pub use edit::EditProfilePage;
pub use view::ProfilePage;

use dioxus::prelude::*;
use shared_types::ProfileResponse;
use shared_ui::use_toast;

use crate::feedback::{error_text, report_failure};

/// Fetch the signed-in user's profile. Errors arrive as display text.
fn use_profile() -> Resource<Result<ProfileResponse, String>> {
    let toast = use_toast();
    use_resource(move || async move {
        let result = server::api::get_profile().await;
        if let Err(e) = &result {
            report_failure(toast, "load profile", e);
        }
        result.map_err(|e| error_text(&e))
    })
}
