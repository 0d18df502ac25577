use crate::config;

/// Process-wide state handed to the UI at launch
#[derive(Clone)]
pub struct AppContext {
    pub config: config::Config,
}
