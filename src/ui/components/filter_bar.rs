use crate::roster::GenderFilter;
use crate::ui::use_browser_state;
use dioxus::prelude::*;

/// Name search and gender selector; both stay disabled until loading finishes
#[component]
pub fn FilterBar() -> Element {
    let state = use_browser_state();
    let mut search_text = state.search_text;
    let mut gender = state.gender;
    let is_loading = state.is_loading();
    let selected = *gender.read();

    rsx! {
        div { class: "filter-bar",
            div { class: "filter-field filter-search",
                label { r#for: "character-search", "Search characters" }
                div { class: "input-group",
                    input {
                        id: "character-search",
                        r#type: "text",
                        placeholder: "Search by name...",
                        value: "{search_text.read()}",
                        disabled: is_loading,
                        oninput: move |event: FormEvent| {
                            search_text.set(event.value());
                        },
                    }
                    span { class: "input-group-icon", "🔍" }
                }
            }
            div { class: "filter-field filter-gender",
                label { r#for: "gender-filter", "Filter by gender" }
                select {
                    id: "gender-filter",
                    value: "{selected.value()}",
                    disabled: is_loading,
                    onchange: move |event: FormEvent| {
                        gender.set(GenderFilter::from_value(&event.value()));
                    },
                    for choice in GenderFilter::ALL_OPTIONS {
                        option {
                            key: "{choice.value()}",
                            value: "{choice.value()}",
                            selected: choice == selected,
                            "{choice.label()}"
                        }
                    }
                }
            }
        }
    }
}
