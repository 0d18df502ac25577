pub mod client;
pub mod models;

pub use client::{PageSource, SwapiClient, SwapiError};
pub use models::{Character, PeoplePage};
