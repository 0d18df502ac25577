use crate::loader::{LoadProgress, LoadSink, LoadState};
use crate::roster::{derive_display_list, FilterCriteria, GenderFilter};
use crate::swapi::Character;
use dioxus::prelude::*;

/// Signals shared by the character browser and its children
#[derive(Clone, Copy)]
pub struct BrowserState {
    /// Every character loaded so far, in arrival order
    pub characters: Signal<Vec<Character>>,
    pub search_text: Signal<String>,
    pub gender: Signal<GenderFilter>,
    pub load_state: Signal<LoadState>,
    pub progress: Signal<LoadProgress>,
    /// Filtered and sorted view of `characters`
    pub display: Memo<Vec<Character>>,
}

impl BrowserState {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(self.search_text.read().clone(), *self.gender.read())
    }

    pub fn is_loading(&self) -> bool {
        self.load_state.read().is_loading()
    }
}

impl LoadSink for BrowserState {
    fn progress(&mut self, progress: LoadProgress) {
        self.progress.set(progress);
    }

    fn publish(&mut self, characters: Vec<Character>) {
        self.characters.set(characters);
    }

    fn finish(&mut self) {
        let finished = self.load_state.peek().finish();
        self.load_state.set(finished);
    }
}

/// Create the browser signals and provide them to every child component
pub fn use_browser_state_provider() -> BrowserState {
    use_browser_state_with(Vec::new(), LoadState::default(), FilterCriteria::default())
}

/// Like `use_browser_state_provider`, starting from the given values.
/// Only the first render's arguments are used.
pub fn use_browser_state_with(
    initial: Vec<Character>,
    initial_state: LoadState,
    initial_criteria: FilterCriteria,
) -> BrowserState {
    let FilterCriteria {
        search_text: initial_search,
        gender: initial_gender,
    } = initial_criteria;

    let characters = use_signal(move || initial);
    let search_text = use_signal(move || initial_search);
    let gender = use_signal(move || initial_gender);
    let load_state = use_signal(move || initial_state);
    let progress = use_signal(LoadProgress::default);

    // Re-runs whenever the character list, search text or gender changes
    let display = use_memo(move || {
        let criteria = FilterCriteria::new(search_text.read().clone(), *gender.read());
        derive_display_list(&characters.read(), &criteria)
    });

    use_context_provider(|| BrowserState {
        characters,
        search_text,
        gender,
        load_state,
        progress,
        display,
    })
}

/// Hook to access the browser state from components below `CharacterBrowser`
pub fn use_browser_state() -> BrowserState {
    use_context::<BrowserState>()
}
