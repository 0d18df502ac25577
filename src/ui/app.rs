use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;

use crate::config::Config;
use crate::ui::components::CharacterBrowser;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root component: stylesheet plus the character browser
#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        CharacterBrowser {}
    }
}

pub fn make_config(config: &Config) -> DioxusConfig {
    DioxusConfig::default().with_window(make_window(config))
}

fn make_window(config: &Config) -> WindowBuilder {
    WindowBuilder::new()
        .with_title(config.window_title.clone())
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200, 800))
}
