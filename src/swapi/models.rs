use serde::{Deserialize, Serialize};

/// A person from the SWAPI people collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub birth_year: String,
    #[serde(default)]
    pub mass: String, // Kilograms as a string, or "unknown"
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub hair_color: String,
    #[serde(default)]
    pub skin_color: String,
    #[serde(default)]
    pub eye_color: String,
    #[serde(default)]
    pub url: String,
}

impl Character {
    /// Character with only the fields the browser displays
    pub fn new(name: &str, gender: &str, birth_year: &str, mass: &str) -> Self {
        Self {
            name: name.to_string(),
            gender: gender.to_string(),
            birth_year: birth_year.to_string(),
            mass: mass.to_string(),
            height: String::new(),
            hair_color: String::new(),
            skin_color: String::new(),
            eye_color: String::new(),
            url: String::new(),
        }
    }
}

/// One page of the people collection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PeoplePage {
    #[serde(default)]
    pub count: Option<u64>,
    /// URL of the following page; `None` on the last page
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<Character>,
}

impl PeoplePage {
    pub fn is_last(&self) -> bool {
        self.next.as_deref().map_or(true, |next| next.trim().is_empty())
    }
}
