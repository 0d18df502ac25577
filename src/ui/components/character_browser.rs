use crate::loader::{load_characters, LoadSink};
use crate::swapi::SwapiClient;
use crate::ui::browser_context::{use_browser_state, use_browser_state_provider};
use crate::ui::AppContext;
use dioxus::prelude::*;
use tracing::{debug, error};

use super::{CharacterGrid, FilterBar, LoadingIndicator, NoResults};

/// Star Wars character browser: loads every character once, then filters locally
#[component]
pub fn CharacterBrowser() -> Element {
    let app = use_context::<AppContext>();
    let state = use_browser_state_provider();

    // use_hook runs once per component lifetime, re-renders never reload
    use_hook(move || {
        let config = app.config.clone();
        spawn(async move {
            let mut state = state;
            match SwapiClient::new(&config) {
                Ok(client) => load_characters(&client, &config.people_url(), &mut state).await,
                Err(e) => {
                    error!("Failed to create SWAPI client: {}", e);
                    state.finish();
                }
            }
        });
    });

    rsx! {
        BrowserView {}
    }
}

/// Filter bar plus spinner, empty state or card grid for the shared state
#[component]
pub fn BrowserView() -> Element {
    let state = use_browser_state();
    let is_loading = state.is_loading();
    let display = state.display.read().clone();

    if !is_loading {
        // Hoisted: tracing's macros shadow a local named `display`
        let display_len = display.len();
        debug!(
            "Showing {} of {} character(s) for {:?}",
            display_len,
            state.characters.read().len(),
            state.criteria()
        );
    }

    rsx! {
        div { class: "browser",
            h1 { class: "browser-title", "Star Wars Characters" }

            FilterBar {}

            if is_loading {
                LoadingIndicator { progress: *state.progress.read() }
            } else if display.is_empty() {
                NoResults {}
            } else {
                CharacterGrid { characters: display }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::LoadState;
    use crate::roster::{FilterCriteria, GenderFilter};
    use crate::swapi::Character;
    use crate::test_support::sample_roster;
    use crate::ui::browser_context::use_browser_state_with;

    #[derive(Clone)]
    struct Fixture {
        characters: Vec<Character>,
        load_state: LoadState,
        criteria: FilterCriteria,
    }

    #[component]
    fn Harness() -> Element {
        let fixture = use_context::<Fixture>();
        use_browser_state_with(fixture.characters, fixture.load_state, fixture.criteria);

        rsx! {
            BrowserView {}
        }
    }

    fn render(characters: Vec<Character>, load_state: LoadState, criteria: FilterCriteria) -> String {
        let mut dom = VirtualDom::new(Harness).with_root_context(Fixture {
            characters,
            load_state,
            criteria,
        });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// Opening tag of the element with `id`
    fn opening_tag<'a>(html: &'a str, id: &str) -> &'a str {
        let at = html
            .find(&format!("id=\"{}\"", id))
            .unwrap_or_else(|| panic!("no element with id {} in {}", id, html));
        let start = html[..at].rfind('<').unwrap();
        let end = at + html[at..].find('>').unwrap();
        &html[start..=end]
    }

    fn is_disabled(tag: &str) -> bool {
        tag.contains("disabled")
            && !tag.contains("disabled=false")
            && !tag.contains("disabled=\"false\"")
    }

    fn card_count(html: &str) -> usize {
        html.matches("class=\"character-card\"").count()
    }

    #[test]
    fn test_loading_shows_spinner_and_disables_inputs() {
        let html = render(sample_roster(), LoadState::Loading, FilterCriteria::default());

        assert!(html.contains("Loading all characters..."));
        assert!(html.contains("class=\"spinner\""));
        assert!(is_disabled(opening_tag(&html, "character-search")));
        assert!(is_disabled(opening_tag(&html, "gender-filter")));
        assert_eq!(card_count(&html), 0);
        assert!(!html.contains("No characters match those filters."));
    }

    #[test]
    fn test_loaded_shows_one_card_per_match() {
        let html = render(sample_roster(), LoadState::Loaded, FilterCriteria::default());

        assert!(!html.contains("Loading all characters..."));
        assert!(!is_disabled(opening_tag(&html, "character-search")));
        assert!(!is_disabled(opening_tag(&html, "gender-filter")));
        assert_eq!(card_count(&html), 3);

        // Cards follow the sorted display list
        let leia = html.find("Leia Organa").unwrap();
        let luke = html.find("Luke Skywalker").unwrap();
        let yoda = html.find("Yoda").unwrap();
        assert!(leia < luke && luke < yoda);
        assert!(html.contains("77 kg"));
    }

    #[test]
    fn test_loaded_respects_filters() {
        let html = render(
            sample_roster(),
            LoadState::Loaded,
            FilterCriteria::new("lu", GenderFilter::All),
        );
        assert_eq!(card_count(&html), 1);
        assert!(html.contains("Luke Skywalker"));

        let html = render(
            sample_roster(),
            LoadState::Loaded,
            FilterCriteria::new("", GenderFilter::Female),
        );
        assert_eq!(card_count(&html), 1);
        assert!(html.contains("Leia Organa"));
    }

    #[test]
    fn test_empty_list_after_failed_load_shows_no_results() {
        let html = render(Vec::new(), LoadState::Loaded, FilterCriteria::default());

        assert!(html.contains("No characters match those filters."));
        assert_eq!(card_count(&html), 0);
        assert!(!html.contains("class=\"spinner\""));
    }

    #[test]
    fn test_no_match_shows_no_results() {
        let html = render(
            sample_roster(),
            LoadState::Loaded,
            FilterCriteria::new("zzz", GenderFilter::All),
        );

        assert!(html.contains("No characters match those filters."));
        assert_eq!(card_count(&html), 0);
    }
}
