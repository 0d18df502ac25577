pub mod app;
pub mod app_context;
pub mod browser_context;
pub mod components;

pub use app::*;
pub use app_context::AppContext;
pub use browser_context::{use_browser_state, BrowserState};
pub use components::*;

// Re-export constants from app module
pub use app::MAIN_CSS;
