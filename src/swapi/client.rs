use crate::config::Config;
use crate::swapi::models::PeoplePage;
use reqwest::{header, Client, Error as ReqwestError, StatusCode};
use thiserror::Error;
use tracing::{debug, error, warn};

#[derive(Error, Debug)]
pub enum SwapiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Page not found: {0}")]
    NotFound(String),
    #[error("API rate limit exceeded")]
    RateLimit,
    #[error("Unexpected status {status} for {url}")]
    Status { status: StatusCode, url: String },
    #[error("Pagination cycle: {0} was already visited")]
    PaginationCycle(String),
}

/// Source of people pages (allows mocking for tests)
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<PeoplePage, SwapiError>;
}

/// Production SWAPI client
#[derive(Clone)]
pub struct SwapiClient {
    client: Client,
}

impl SwapiClient {
    pub fn new(config: &Config) -> Result<Self, SwapiError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl PageSource for SwapiClient {
    async fn fetch_page(&self, url: &str) -> Result<PeoplePage, SwapiError> {
        debug!("📡 SWAPI: GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            // Decode from text so malformed payloads surface as Serialization errors
            let body = response.text().await?;
            let page: PeoplePage = serde_json::from_str(&body).map_err(|e| {
                error!("JSON parsing error for {}: {}", url, e);
                e
            })?;
            Ok(page)
        } else {
            Err(status_error(status, url))
        }
    }
}

pub(crate) fn status_error(status: StatusCode, url: &str) -> SwapiError {
    match status {
        StatusCode::NOT_FOUND => {
            warn!("✗ SWAPI page not found: {}", url);
            SwapiError::NotFound(url.to_string())
        }
        StatusCode::TOO_MANY_REQUESTS => {
            warn!("✗ SWAPI rate limit exceeded");
            SwapiError::RateLimit
        }
        _ => {
            warn!("✗ SWAPI error: {} for {}", status, url);
            SwapiError::Status {
                status,
                url: url.to_string(),
            }
        }
    }
}
