use crate::swapi::Character;
use dioxus::prelude::*;

use super::CharacterCard;

/// Responsive grid of character cards, keyed by name
#[component]
pub fn CharacterGrid(characters: Vec<Character>) -> Element {
    rsx! {
        div { class: "card-grid",
            for character in characters {
                CharacterCard {
                    key: "{character.name}",
                    character: character.clone(),
                }
            }
        }
    }
}
