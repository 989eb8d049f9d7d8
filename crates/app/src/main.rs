use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod auth;
mod feedback;
mod format_helpers;
mod routes;
mod search;
mod upload;

use auth::AuthState;
use routes::Route;
use search::SearchQuery;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let config = server::config::load_config();
        server::health::record_start_time();

        let api = server::upstream::SchoolApi::global().clone();

        // Uploads cross the server-function boundary base64-encoded inside
        // JSON, so the body limit is roughly twice the file limit.
        let max_body = config.api.max_upload_bytes.saturating_mul(2);

        let router = dioxus::server::router(App)
            .merge(server::proxy::proxy_router(api.clone()))
            .merge(server::health::health_router(api.clone()))
            .layer(axum::extract::DefaultBodyLimit::max(max_body))
            .layer(axum::middleware::from_fn_with_state(
                api,
                server::session::middleware::session_middleware,
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));

        tracing::info!(upstream = %config.api.base_url, "School admin dashboard ready");
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Feature flags are fetched once; a failure falls back to the defaults.
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);
    use_context_provider(AuthState::new);
    use_context_provider(SearchQuery::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            SuspenseBoundary {
                fallback: |_| rsx! {
                    div { class: "auth-guard-loading",
                        p { "Loading..." }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
