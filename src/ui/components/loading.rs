use crate::loader::LoadProgress;
use dioxus::prelude::*;

/// Spinner shown while pages are still arriving
#[component]
pub fn LoadingIndicator(progress: LoadProgress) -> Element {
    let status = loading_status_text(&progress);

    rsx! {
        div { class: "loading", role: "status",
            div { class: "spinner" }
            p { "Loading all characters..." }
            if let Some(status) = status {
                p { class: "loading-progress", "{status}" }
            }
        }
    }
}

/// "Loaded N of M characters" once the first page has arrived
pub fn loading_status_text(progress: &LoadProgress) -> Option<String> {
    if progress.pages_loaded == 0 {
        return None;
    }

    Some(match progress.expected_total {
        Some(total) => format!(
            "Loaded {} of {} characters",
            progress.characters_loaded, total
        ),
        None => format!("Loaded {} characters", progress.characters_loaded),
    })
}
