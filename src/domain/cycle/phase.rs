//! Phase definitions - named day ranges with recommended and avoided foods.

use serde::{Deserialize, Serialize};

use super::Preferences;
use crate::domain::foundation::DayRange;

/// Suffix appended to every food recommended by an educational phase.
pub const EDUCATIONAL_MARKER: &str = " (educational focus)";

/// Foods recommended within one category, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodGroup {
    pub category: String,
    pub foods: Vec<String>,
}

impl FoodGroup {
    pub fn new<I, S>(category: impl Into<String>, foods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category: category.into(),
            foods: foods.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered mapping from category name to foods.
///
/// Order of categories and of foods inside each category is significant
/// and is kept by every transformation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodGroups(Vec<FoodGroup>);

impl FoodGroups {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a category; builder style.
    pub fn with_group<I, S>(mut self, category: impl Into<String>, foods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.push(FoodGroup::new(category, foods));
        self
    }

    pub fn groups(&self) -> &[FoodGroup] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FoodGroup> {
        self.0.iter()
    }

    /// Foods for a category, if the category exists.
    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.foods.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|g| g.category.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of foods across all categories.
    pub fn total_foods(&self) -> usize {
        self.0.iter().map(|g| g.foods.len()).sum()
    }

    /// Applies `f` to every food, keeping category structure.
    fn map_foods(self, f: impl Fn(String) -> String) -> Self {
        self.0
            .into_iter()
            .map(|group| FoodGroup {
                category: group.category,
                foods: group.foods.into_iter().map(&f).collect(),
            })
            .collect()
    }
}

impl FromIterator<FoodGroup> for FoodGroups {
    fn from_iter<T: IntoIterator<Item = FoodGroup>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FoodGroups {
    type Item = &'a FoodGroup;
    type IntoIter = std::slice::Iter<'a, FoodGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Variant tag for a phase definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PhaseKind {
    /// Plain phase: filtered foods are returned as-is.
    Standard,
    /// Phase carrying an explanatory note; filtered foods are marked.
    Educational { info: String },
}

/// A named span of cycle days with recommended and avoided foods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseDefinition {
    name: String,
    days: DayRange,
    recommendations: FoodGroups,
    avoid: Vec<String>,
    kind: PhaseKind,
}

impl PhaseDefinition {
    /// Creates a standard phase.
    pub fn standard<S: Into<String>>(
        name: impl Into<String>,
        days: DayRange,
        recommendations: FoodGroups,
        avoid: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            days,
            recommendations,
            avoid: avoid.into_iter().map(Into::into).collect(),
            kind: PhaseKind::Standard,
        }
    }

    /// Creates an educational phase with an explanatory note.
    pub fn educational<S: Into<String>>(
        name: impl Into<String>,
        days: DayRange,
        recommendations: FoodGroups,
        avoid: impl IntoIterator<Item = S>,
        info: impl Into<String>,
    ) -> Self {
        Self {
            kind: PhaseKind::Educational { info: info.into() },
            ..Self::standard(name, days, recommendations, avoid)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn days(&self) -> DayRange {
        self.days
    }

    /// Unfiltered reference foods.
    pub fn recommendations(&self) -> &FoodGroups {
        &self.recommendations
    }

    pub fn avoid(&self) -> &[String] {
        &self.avoid
    }

    pub fn kind(&self) -> &PhaseKind {
        &self.kind
    }

    /// Explanatory note, present only for educational phases.
    pub fn info(&self) -> Option<&str> {
        match &self.kind {
            PhaseKind::Standard => None,
            PhaseKind::Educational { info } => Some(info),
        }
    }

    pub fn is_educational(&self) -> bool {
        matches!(self.kind, PhaseKind::Educational { .. })
    }

    pub fn contains_day(&self, day: u32) -> bool {
        self.days.contains(day)
    }

    /// Removes foods matching an allergen, without any decoration.
    ///
    /// Matching is exact and case-insensitive. Categories emptied by the
    /// filter are kept so callers can render them as having no safe foods.
    pub fn base_recommendations(&self, preferences: &Preferences) -> FoodGroups {
        if preferences.is_empty() {
            return self.recommendations.clone();
        }

        self.recommendations
            .iter()
            .map(|group| FoodGroup {
                category: group.category.clone(),
                foods: group
                    .foods
                    .iter()
                    .filter(|food| !preferences.contains(food))
                    .cloned()
                    .collect(),
            })
            .collect()
    }

    /// Filtered foods as presented to the user.
    ///
    /// Educational phases suffix every surviving food with
    /// [`EDUCATIONAL_MARKER`].
    pub fn filter_recommendations(&self, preferences: &Preferences) -> FoodGroups {
        let filtered = self.base_recommendations(preferences);
        match self.kind {
            PhaseKind::Standard => filtered,
            PhaseKind::Educational { .. } => {
                filtered.map_foods(|food| format!("{}{}", food, EDUCATIONAL_MARKER))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn groups() -> FoodGroups {
        FoodGroups::new()
            .with_group("Fruits", ["kiwi", "Oranges", "papaya"])
            .with_group("Proteins", ["eggs", "tofu", "egg whites"])
            .with_group("Greens", ["kale"])
    }

    fn standard() -> PhaseDefinition {
        PhaseDefinition::standard(
            "Test Phase",
            DayRange::new(1, 5).unwrap(),
            groups(),
            ["Caffeine"],
        )
    }

    fn educational() -> PhaseDefinition {
        PhaseDefinition::educational(
            "Learning Phase",
            DayRange::new(6, 14).unwrap(),
            groups(),
            ["Alcohol"],
            "Energy often increases.",
        )
    }

    #[test]
    fn empty_preferences_return_full_catalog() {
        let phase = standard();
        assert_eq!(phase.filter_recommendations(&Preferences::empty()), groups());
    }

    #[test]
    fn filtering_returns_an_independent_copy() {
        let phase = standard();
        let mut copy = phase.filter_recommendations(&Preferences::empty());
        copy = copy.with_group("Extra", ["chips"]);
        assert_eq!(copy.len(), 4);
        assert_eq!(phase.recommendations().len(), 3);
    }

    #[test]
    fn filtering_is_case_insensitive_and_exact() {
        let phase = standard();
        let prefs = Preferences::from_allergens(["EGGS", "oranges"]);
        let filtered = phase.filter_recommendations(&prefs);

        assert_eq!(filtered.get("Fruits").unwrap(), ["kiwi", "papaya"]);
        assert_eq!(filtered.get("Proteins").unwrap(), ["tofu", "egg whites"]);
    }

    #[test]
    fn emptied_category_is_kept() {
        let phase = standard();
        let prefs = Preferences::from_allergens(["kale"]);
        let filtered = phase.filter_recommendations(&prefs);

        assert_eq!(filtered.len(), 3);
        assert!(filtered.get("Greens").unwrap().is_empty());
    }

    #[test]
    fn educational_phase_marks_every_food() {
        let phase = educational();
        let prefs = Preferences::from_allergens(["tofu"]);
        let filtered = phase.filter_recommendations(&prefs);

        assert_eq!(
            filtered.get("Proteins").unwrap(),
            ["eggs (educational focus)", "egg whites (educational focus)"]
        );
        assert_eq!(phase.avoid(), ["Alcohol"]);
        assert_eq!(phase.info(), Some("Energy often increases."));
    }

    #[test]
    fn standard_phase_has_no_info() {
        let phase = standard();
        assert!(phase.info().is_none());
        assert!(!phase.is_educational());
        assert_eq!(phase.kind(), &PhaseKind::Standard);
    }

    #[test]
    fn contains_day_follows_range() {
        let phase = educational();
        assert!(!phase.contains_day(5));
        assert!(phase.contains_day(6));
        assert!(phase.contains_day(14));
    }

    fn allergen_subset() -> impl Strategy<Value = Vec<String>> {
        let pool = vec![
            "kiwi", "ORANGES", "papaya", "eggs", "Tofu", "egg whites", "kale", "egg", "milk",
        ];
        proptest::sample::subsequence(pool, 0..=9)
            .prop_map(|v| v.into_iter().map(String::from).collect())
    }

    fn as_phase(groups: FoodGroups) -> PhaseDefinition {
        PhaseDefinition::standard("Again", DayRange::new(1, 1).unwrap(), groups, ["x"])
    }

    proptest! {
        #[test]
        fn filtering_is_idempotent(allergens in allergen_subset()) {
            let prefs = Preferences::from_allergens(&allergens);
            let once = standard().filter_recommendations(&prefs);
            let twice = as_phase(once.clone()).filter_recommendations(&prefs);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn filtered_foods_never_match_an_allergen(allergens in allergen_subset()) {
            let prefs = Preferences::from_allergens(&allergens);
            let filtered = standard().filter_recommendations(&prefs);
            for group in &filtered {
                for food in &group.foods {
                    prop_assert!(!prefs.contains(food));
                }
            }
            prop_assert_eq!(filtered.len(), groups().len());
        }

        #[test]
        fn stripping_marker_reproduces_base_filter(allergens in allergen_subset()) {
            let prefs = Preferences::from_allergens(&allergens);
            let phase = educational();
            let marked = phase.filter_recommendations(&prefs);
            let base = phase.base_recommendations(&prefs);

            let stripped: FoodGroups = marked
                .iter()
                .map(|g| {
                    let foods: Vec<String> = g
                        .foods
                        .iter()
                        .map(|f| {
                            assert!(f.ends_with(EDUCATIONAL_MARKER));
                            f.trim_end_matches(EDUCATIONAL_MARKER).to_string()
                        })
                        .collect();
                    FoodGroup::new(g.category.clone(), foods)
                })
                .collect();
            prop_assert_eq!(stripped, base);
        }
    }
}
