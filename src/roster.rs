//! Filtering and ordering of the loaded characters.
//!
//! `derive_display_list` is recomputed from scratch whenever the loaded list
//! or the filter inputs change. The output only ever contains characters from
//! the input and is sorted by `locale_compare` on the name.

use crate::swapi::Character;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Gender options offered by the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenderFilter {
    #[default]
    All,
    Male,
    Female,
    NotApplicable,
    Hermaphrodite,
}

impl GenderFilter {
    pub const ALL_OPTIONS: [GenderFilter; 5] = [
        GenderFilter::All,
        GenderFilter::Male,
        GenderFilter::Female,
        GenderFilter::NotApplicable,
        GenderFilter::Hermaphrodite,
    ];

    /// Literal compared against `Character::gender`, also the `<option>` value
    pub fn value(self) -> &'static str {
        match self {
            GenderFilter::All => "all",
            GenderFilter::Male => "male",
            GenderFilter::Female => "female",
            GenderFilter::NotApplicable => "n/a",
            GenderFilter::Hermaphrodite => "hermaphrodite",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GenderFilter::All => "All",
            GenderFilter::Male => "Male",
            GenderFilter::Female => "Female",
            GenderFilter::NotApplicable => "n/a",
            GenderFilter::Hermaphrodite => "Hermaphrodite",
        }
    }

    /// Parse a selector value; anything unknown selects everyone
    pub fn from_value(value: &str) -> Self {
        Self::ALL_OPTIONS
            .into_iter()
            .find(|option| option.value() == value)
            .unwrap_or(GenderFilter::All)
    }

    pub fn matches(self, gender: &str) -> bool {
        self == GenderFilter::All || gender == self.value()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub search_text: String,
    pub gender: GenderFilter,
}

impl FilterCriteria {
    pub fn new(search_text: impl Into<String>, gender: GenderFilter) -> Self {
        Self {
            search_text: search_text.into(),
            gender,
        }
    }

    pub fn matches(&self, character: &Character) -> bool {
        self.gender.matches(&character.gender)
            && name_has_prefix(&character.name, &self.search_text)
    }
}

/// Case-insensitive prefix match; an empty prefix matches every name
fn name_has_prefix(name: &str, prefix: &str) -> bool {
    prefix.is_empty() || name.to_lowercase().starts_with(&prefix.to_lowercase())
}

/// The characters to show for `criteria`, sorted by name
pub fn derive_display_list(master: &[Character], criteria: &FilterCriteria) -> Vec<Character> {
    let mut display: Vec<Character> = master
        .iter()
        .filter(|character| criteria.matches(character))
        .cloned()
        .collect();

    display.sort_by_cached_key(|character| CollationKey::new(&character.name));
    display
}

/// Compare two strings the way a root-locale collator orders names
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

/// Multi-level sort key: base letters, then accents, then case, then code points
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    base: String,
    accents: String,
    // true marks an uppercase position, so lowercase sorts first
    case: Vec<bool>,
    raw: String,
}

impl CollationKey {
    fn new(s: &str) -> Self {
        let base = s
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect();
        let accents = s.nfd().flat_map(char::to_lowercase).collect();
        let case = s.nfd().map(char::is_uppercase).collect();

        Self {
            base,
            accents,
            case,
            raw: s.to_string(),
        }
    }
}
