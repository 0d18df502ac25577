// Test support utilities for both unit and integration tests

use crate::swapi::{Character, PageSource, PeoplePage, SwapiError};
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Mutex;

pub const MOCK_PEOPLE_URL: &str = "mock://swapi/people/";

/// Scripted response for one page URL
#[derive(Debug, Clone)]
enum MockResponse {
    Page(PeoplePage),
    Status(u16),
}

/// Mock page source for testing
///
/// Serves pages from memory instead of hitting swapi.dev and records every
/// requested URL in order.
#[derive(Default)]
pub struct MockPageSource {
    responses: HashMap<String, MockResponse>,
    requests: Mutex<Vec<String>>,
}

impl MockPageSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain of pages starting at `MOCK_PEOPLE_URL`, each linking to the next
    pub fn with_pages(pages: Vec<Vec<Character>>) -> Self {
        let mut source = Self::new();
        let total: usize = pages.iter().map(Vec::len).sum();
        let page_count = pages.len();

        for (index, results) in pages.into_iter().enumerate() {
            let next = (index + 1 < page_count).then(|| page_url(index + 2));
            source.insert_page(
                &page_url(index + 1),
                PeoplePage {
                    count: Some(total as u64),
                    next,
                    previous: (index > 0).then(|| page_url(index)),
                    results,
                },
            );
        }
        source
    }

    pub fn insert_page(&mut self, url: &str, page: PeoplePage) {
        self.responses
            .insert(url.to_string(), MockResponse::Page(page));
    }

    /// Make `url` answer with an HTTP error status
    pub fn fail_with_status(&mut self, url: &str, status: u16) {
        self.responses
            .insert(url.to_string(), MockResponse::Status(status));
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl PageSource for MockPageSource {
    async fn fetch_page(&self, url: &str) -> Result<PeoplePage, SwapiError> {
        self.requests.lock().unwrap().push(url.to_string());

        match self.responses.get(url) {
            Some(MockResponse::Page(page)) => Ok(page.clone()),
            Some(MockResponse::Status(code)) => {
                let status =
                    StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                Err(crate::swapi::client::status_error(status, url))
            }
            None => Err(SwapiError::NotFound(url.to_string())),
        }
    }
}

/// URL of page `n` (1-based) in a mock chain
pub fn page_url(n: usize) -> String {
    if n <= 1 {
        MOCK_PEOPLE_URL.to_string()
    } else {
        format!("{}?page={}", MOCK_PEOPLE_URL, n)
    }
}

/// `count` characters named "<prefix> 0", "<prefix> 1", ...
pub fn characters(prefix: &str, count: usize) -> Vec<Character> {
    (0..count)
        .map(|i| Character::new(&format!("{} {}", prefix, i), "n/a", "unknown", "unknown"))
        .collect()
}

/// The three-character roster used across tests
pub fn sample_roster() -> Vec<Character> {
    vec![
        Character::new("Luke Skywalker", "male", "19BBY", "77"),
        Character::new("Leia Organa", "female", "19BBY", "49"),
        Character::new("Yoda", "n/a", "896BBY", "17"),
    ]
}

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
