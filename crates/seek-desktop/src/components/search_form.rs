//! Search form component

use std::time::Duration;

use dioxus::prelude::*;

use crate::hooks::use_debounced;

/// Single-field search form.
///
/// Every keystroke updates the field and restarts the quiet period; `on_search`
/// receives only the term that was current when typing paused. The delay is
/// read once when the form mounts.
#[component]
pub fn SearchForm(
    /// Receives the latest term once typing pauses
    on_search: EventHandler<String>,
    #[props(into, default = "Search...".to_string())] placeholder: String,
    #[props(default = 300)] debounce_ms: u64,
) -> Element {
    let mut search_term = use_signal(String::new);
    let search = use_debounced(Duration::from_millis(debounce_ms), on_search);

    rsx! {
        form {
            class: "search-form",
            style: "max-width: 480px;",
            onsubmit: move |evt| evt.prevent_default(),

            input {
                r#type: "text",
                name: "search",
                placeholder: "{placeholder}",
                value: "{search_term}",
                oninput: move |evt| {
                    let term = evt.value();
                    search_term.set(term.clone());
                    search.call(term);
                },
                style: "
                    width: 100%;
                    padding: 8px 12px;
                    border: 1px solid #d0d0d0;
                    border-radius: 6px;
                    font-size: 14px;
                    outline: none;
                ",
            }
        }
    }
}
