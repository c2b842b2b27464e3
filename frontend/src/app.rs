use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::pages::search_page::SearchPage;
use crate::platform::history_bridge;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    // one bridge per page load, shared by every consumer
    use_context_provider(history_bridge);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            SearchPage {}
        }
    }
}
