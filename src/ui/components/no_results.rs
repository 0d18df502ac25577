use dioxus::prelude::*;

/// Shown when no character matches the current filters
#[component]
pub fn NoResults() -> Element {
    rsx! {
        div { class: "empty-state",
            p { "No characters match those filters." }
        }
    }
}
