//! Main application component

use dioxus::prelude::*;
use seek_core::SearchSettings;

use crate::components::SearchForm;

/// Root application component
#[component]
pub fn App() -> Element {
    let settings = use_context::<SearchSettings>();

    let handle_search = move |term: String| {
        tracing::info!("Search term: {:?}", term);
    };

    rsx! {
        div {
            class: "app",
            style: "
                min-height: 100vh;
                padding: 32px;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
            ",

            h1 {
                style: "font-size: 22px; margin: 0 0 16px;",
                "{settings.heading}"
            }

            SearchForm {
                on_search: handle_search,
                placeholder: settings.placeholder.clone(),
                debounce_ms: settings.debounce_ms,
            }
        }
    }
}
