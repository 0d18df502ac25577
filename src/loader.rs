//! Serial pagination over the people collection.
//!
//! Pages are requested one at a time, following each page's `next` pointer
//! until the collection reports its last page. A failing page ends the walk:
//! whatever was accumulated before it is kept and the error is handed back to
//! the caller, which logs it and leaves the loading state anyway.

use crate::swapi::{Character, PageSource, SwapiError};
use std::collections::HashSet;
use tracing::{debug, error, info, warn};

/// Progress reported after each page arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadProgress {
    pub pages_loaded: usize,
    pub characters_loaded: usize,
    /// Collection size as reported by the API, if it reported one
    pub expected_total: Option<u64>,
}

/// Result of walking the collection
#[derive(Debug)]
pub struct LoadOutcome {
    /// Every character received, in arrival order
    pub characters: Vec<Character>,
    pub pages_loaded: usize,
    /// Set when a page failed; `characters` then holds the pages before it
    pub error: Option<SwapiError>,
}

impl LoadOutcome {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Loading flag of the browser; only ever moves from `Loading` to `Loaded`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
}

impl LoadState {
    pub fn is_loading(self) -> bool {
        self == LoadState::Loading
    }

    /// The loaded state; finishing twice is a no-op
    pub fn finish(self) -> LoadState {
        LoadState::Loaded
    }
}

/// Where a load run reports progress and publishes its result
pub trait LoadSink {
    fn progress(&mut self, progress: LoadProgress);
    fn publish(&mut self, characters: Vec<Character>);
    /// Leave the loading state; called exactly once per run
    fn finish(&mut self);
}

/// Load the whole collection into `sink`, then finish it.
///
/// `finish` comes after the last page or the first failure, never before.
pub async fn load_characters<S, K>(source: &S, start_url: &str, sink: &mut K)
where
    S: PageSource + ?Sized,
    K: LoadSink + ?Sized,
{
    let outcome = load_all_characters(source, start_url, |p| sink.progress(p)).await;

    if let Some(err) = &outcome.error {
        warn!(
            "Showing {} character(s) after load failure: {}",
            outcome.characters.len(),
            err
        );
    }
    sink.publish(outcome.characters);
    sink.finish();
}

/// Fetch every page starting at `start_url` and concatenate the results.
///
/// Never fails: a fetch error is logged and returned inside the outcome.
pub async fn load_all_characters<S, F>(
    source: &S,
    start_url: &str,
    mut on_progress: F,
) -> LoadOutcome
where
    S: PageSource + ?Sized,
    F: FnMut(LoadProgress),
{
    let mut characters = Vec::new();
    let mut visited = HashSet::new();
    let mut progress = LoadProgress::default();
    let mut next_url = Some(start_url.to_string());

    while let Some(url) = next_url.take() {
        if !visited.insert(url.clone()) {
            let err = SwapiError::PaginationCycle(url.clone());
            return fail(characters, progress, &url, err);
        }

        let page = match source.fetch_page(&url).await {
            Ok(page) => page,
            Err(err) => return fail(characters, progress, &url, err),
        };

        let is_last = page.is_last();
        let batch_len = page.results.len();
        characters.extend(page.results);

        progress.pages_loaded += 1;
        progress.characters_loaded = characters.len();
        progress.expected_total = page.count.or(progress.expected_total);
        debug!(
            "Page {} ({}): {} character(s), {} so far",
            progress.pages_loaded,
            url,
            batch_len,
            characters.len()
        );
        on_progress(progress);

        if !is_last {
            next_url = page.next;
        }
    }

    info!(
        "Loaded {} character(s) from {} page(s)",
        characters.len(),
        progress.pages_loaded
    );

    LoadOutcome {
        characters,
        pages_loaded: progress.pages_loaded,
        error: None,
    }
}

fn fail(
    characters: Vec<Character>,
    progress: LoadProgress,
    url: &str,
    err: SwapiError,
) -> LoadOutcome {
    error!(
        "Failed to fetch characters page {}: {} (stopped after {} page(s), keeping {} character(s))",
        url,
        err,
        progress.pages_loaded,
        characters.len()
    );
    LoadOutcome {
        characters,
        pages_loaded: progress.pages_loaded,
        error: Some(err),
    }
}
