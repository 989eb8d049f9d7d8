mod ask;
mod board;

pub use ask::AskQuestionPage;
pub use board::QnaBoardPage;

use dioxus::prelude::*;
use shared_types::FeatureFlags;
use shared_ui::EmptyState;

/// Renders `children` only while the community board is enabled.
#[component]
fn CommunityGate(children: Element) -> Element {
    let flags: FeatureFlags = use_context();
    if !flags.community {
        return rsx! {
            div { class: "container",
                EmptyState {
                    title: "The Q&A board is turned off",
                    description: "Ask an administrator to enable the community feature.",
                }
            }
        };
    }
    rsx! { {children} }
}
