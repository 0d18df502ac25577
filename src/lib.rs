// Library exports for integration tests and reusable components

pub mod config;
pub mod loader;
pub mod roster;
pub mod swapi;
pub mod ui;

pub use loader::{
    load_all_characters, load_characters, LoadOutcome, LoadProgress, LoadSink, LoadState,
};
pub use roster::{derive_display_list, locale_compare, FilterCriteria, GenderFilter};
pub use swapi::{Character, PageSource, PeoplePage, SwapiClient, SwapiError};

// Test support (unit tests, or integration tests with the test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
