use tracing::info;

use holonet::config::Config;
use holonet::ui::{make_config, App, AppContext};

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = Config::load();
    info!("Starting holonet against {}", config.people_url());

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_config(&config))
        .with_context(AppContext { config })
        .launch(App);
}
