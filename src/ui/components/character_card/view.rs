use crate::swapi::Character;
use dioxus::prelude::*;

use super::utils::{format_birth_year, format_mass};

/// Card with a character's name, gender, birth year and mass
#[component]
pub fn CharacterCard(character: Character) -> Element {
    let mass = format_mass(&character.mass);
    let birth_year = format_birth_year(&character.birth_year);

    rsx! {
        div { class: "character-card",
            h2 { class: "character-name", "{character.name}" }
            dl { class: "character-facts",
                dt { "Gender" }
                dd { "{character.gender}" }
                dt { "Birth year" }
                dd { "{birth_year}" }
                dt { "Mass" }
                dd { "{mass}" }
            }
        }
    }
}
