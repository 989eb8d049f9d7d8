use dioxus::prelude::*;
use shared_types::DashboardStats;

#[cfg(feature = "server")]
use super::context::{require_token, ServerResultExt};

/// Admin dashboard counters, built from four concurrent upstream fetches.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_dashboard_stats() -> Result<DashboardStats, ServerFnError> {
    let token = require_token()?;
    crate::upstream::SchoolApi::global()
        .dashboard_stats(&token)
        .await
        .into_server_result()
}
