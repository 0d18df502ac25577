mod character_browser;
pub mod character_card;
mod character_grid;
mod filter_bar;
mod loading;
mod no_results;

pub use character_browser::CharacterBrowser;
pub use character_card::CharacterCard;
pub use character_grid::CharacterGrid;
pub use filter_bar::FilterBar;
pub use loading::{loading_status_text, LoadingIndicator};
pub use no_results::NoResults;
