use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

pub const DEFAULT_API_BASE_URL: &str = "https://swapi.dev/api";
pub const DEFAULT_WINDOW_TITLE: &str = "Star Wars Characters";

/// Application configuration
/// In debug builds: loads .env first, then reads environment variables
/// In release builds: environment variables only
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base of the SWAPI endpoints, without a trailing slash
    pub api_base_url: String,
    /// User-Agent header sent with every page request
    pub user_agent: String,
    /// Desktop window title
    pub window_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: default_user_agent(),
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        if cfg!(debug_assertions) {
            Self::load_with_env_file(Path::new(".env"))
        } else {
            Self::from_lookup(|key| std::env::var(key).ok())
        }
    }

    /// Dev mode: environment plus `path`, environment only when the file is
    /// missing or unreadable
    fn load_with_env_file(path: &Path) -> Self {
        match Self::from_env_file(path) {
            Ok(config) => {
                info!("Config: Dev mode activated - loaded {}", path.display());
                config
            }
            Err(e) if e.not_found() => {
                debug!("Config: No {} file found, using environment only", path.display());
                Self::from_lookup(|key| std::env::var(key).ok())
            }
            Err(e) => {
                warn!("Config: Ignoring {}: {}", path.display(), e);
                Self::from_lookup(|key| std::env::var(key).ok())
            }
        }
    }

    /// Load configuration from a specific env file. Values already present in
    /// the process environment win over the file, matching `dotenvy` semantics.
    fn from_env_file(path: &Path) -> Result<Self, dotenvy::Error> {
        let mut file_vars = HashMap::new();
        for item in dotenvy::from_path_iter(path)? {
            let (key, value) = item?;
            file_vars.insert(key, value);
        }

        Ok(Self::from_lookup(|key| {
            std::env::var(key)
                .ok()
                .or_else(|| file_vars.get(key).cloned())
        }))
    }

    /// Build configuration from any key lookup (environment, map in tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = match non_empty(lookup("HOLONET_API_BASE_URL")) {
            Some(url) => {
                let trimmed = url.trim_end_matches('/').to_string();
                if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
                    warn!(
                        "Config: HOLONET_API_BASE_URL '{}' has no http(s) scheme",
                        trimmed
                    );
                }
                trimmed
            }
            None => defaults.api_base_url,
        };

        let user_agent = non_empty(lookup("HOLONET_USER_AGENT")).unwrap_or(defaults.user_agent);
        let window_title =
            non_empty(lookup("HOLONET_WINDOW_TITLE")).unwrap_or(defaults.window_title);

        debug!("Config: API base URL {}", api_base_url);

        Self {
            api_base_url,
            user_agent,
            window_title,
        }
    }

    /// The fixed first page of the people collection
    pub fn people_url(&self) -> String {
        format!("{}/people/", self.api_base_url)
    }
}

fn default_user_agent() -> String {
    format!("holonet/{}", env!("CARGO_PKG_VERSION"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
