//! End-to-end: load every page from a mock collection, then filter the result
//! the way the browser does.

use holonet::test_support::{
    characters, page_url, sample_roster, tracing_init, MockPageSource, MOCK_PEOPLE_URL,
};
use holonet::{
    derive_display_list, load_all_characters, load_characters, Character, FilterCriteria,
    GenderFilter, LoadProgress, LoadSink, LoadState,
};

fn names(list: &[Character]) -> Vec<String> {
    list.iter().map(|c| c.name.clone()).collect()
}

/// Plays the browser's part: master list, loading state and progress
#[derive(Default)]
struct Browser {
    master: Vec<Character>,
    state: LoadState,
    last_progress: LoadProgress,
}

impl LoadSink for Browser {
    fn progress(&mut self, progress: LoadProgress) {
        // Still loading while pages are arriving
        assert!(self.state.is_loading());
        self.last_progress = progress;
    }

    fn publish(&mut self, characters: Vec<Character>) {
        self.master = characters;
    }

    fn finish(&mut self) {
        self.state = self.state.finish();
    }
}

#[tokio::test]
async fn test_page_sizes_add_up_and_loading_ends_after_last_page() {
    tracing_init();

    let sizes = [10, 10, 10, 10, 10, 10, 10, 10, 2];
    let pages = sizes
        .iter()
        .enumerate()
        .map(|(i, size)| characters(&format!("page{}", i), *size))
        .collect();
    let source = MockPageSource::with_pages(pages);

    let mut browser = Browser::default();
    load_characters(&source, MOCK_PEOPLE_URL, &mut browser).await;

    assert!(!browser.state.is_loading());
    assert_eq!(browser.last_progress.pages_loaded, sizes.len());
    assert_eq!(browser.master.len(), sizes.iter().sum::<usize>());
    assert_eq!(source.requests().last(), Some(&page_url(sizes.len())));
}

#[tokio::test]
async fn test_loaded_roster_filters_like_the_browser() {
    tracing_init();

    let roster = sample_roster();
    let source = MockPageSource::with_pages(vec![vec![roster[0].clone()], roster[1..].to_vec()]);

    let outcome = load_all_characters(&source, MOCK_PEOPLE_URL, |_| {}).await;
    let master = outcome.characters;
    assert_eq!(master.len(), 3);

    let all = derive_display_list(&master, &FilterCriteria::default());
    assert_eq!(names(&all), vec!["Leia Organa", "Luke Skywalker", "Yoda"]);

    let lu = derive_display_list(&master, &FilterCriteria::new("lu", GenderFilter::All));
    assert_eq!(names(&lu), vec!["Luke Skywalker"]);

    let female = derive_display_list(&master, &FilterCriteria::new("", GenderFilter::Female));
    assert_eq!(names(&female), vec!["Leia Organa"]);

    let none = derive_display_list(&master, &FilterCriteria::new("zzz", GenderFilter::All));
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_first_page_failure_leaves_nothing_to_show() {
    tracing_init();

    let mut source = MockPageSource::new();
    source.fail_with_status(MOCK_PEOPLE_URL, 503);

    let mut browser = Browser::default();
    load_characters(&source, MOCK_PEOPLE_URL, &mut browser).await;

    assert!(!browser.state.is_loading());
    assert!(browser.master.is_empty());
    assert_eq!(browser.last_progress, LoadProgress::default());
    assert!(derive_display_list(&browser.master, &FilterCriteria::default()).is_empty());

    let outcome = load_all_characters(&source, MOCK_PEOPLE_URL, |_| {}).await;
    assert!(outcome.error.is_some());
}
