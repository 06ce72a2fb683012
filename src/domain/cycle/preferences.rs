//! Preferences value object holding a user's declared allergens.

use serde::Serialize;
use std::collections::BTreeSet;

/// Declared allergens for one user.
///
/// Entries are trimmed and lower-cased on the way in, so membership checks
/// are case-insensitive and duplicates collapse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Preferences {
    allergens: BTreeSet<String>,
}

impl Preferences {
    /// Creates preferences with no allergens.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates preferences from any list of allergen names.
    ///
    /// Blank entries are dropped.
    pub fn from_allergens<I, S>(allergens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let allergens = allergens
            .into_iter()
            .filter_map(|a| normalize(a.as_ref()))
            .collect();
        Self { allergens }
    }

    /// Parses a comma-separated allergen list such as `"Dairy, gluten"`.
    pub fn from_comma_separated(input: &str) -> Self {
        Self::from_allergens(input.split(','))
    }

    /// Returns true if `food` matches a declared allergen exactly,
    /// ignoring case and surrounding whitespace.
    pub fn contains(&self, food: &str) -> bool {
        match normalize(food) {
            Some(key) => self.allergens.contains(&key),
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.allergens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.allergens.len()
    }

    /// Normalized allergens in sorted order.
    pub fn allergens(&self) -> impl Iterator<Item = &str> {
        self.allergens.iter().map(String::as_str)
    }
}

fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
