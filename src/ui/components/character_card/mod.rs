pub mod utils;
mod view;

pub use view::CharacterCard;
