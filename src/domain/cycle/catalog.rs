//! Phase catalog - the ordered phase definitions covering one cycle.
//!
//! The reference catalog has four phases: Menstrual, Follicular
//! (educational), Ovulatory and Luteal. The Menstrual phase ends with the
//! period; the Ovulatory and Luteal phases are anchored to the end of the
//! cycle, so the Follicular phase absorbs any difference in cycle length.

use thiserror::Error;
use tracing::warn;

use super::phase::{FoodGroups, PhaseDefinition};
use crate::domain::foundation::{DayRange, DomainError, ErrorCode};
use crate::domain::user::UserProfile;

/// Days from ovulation start to the end of the cycle, counting both ends.
const OVULATION_TO_CYCLE_END: u32 = 14;

/// Length of the ovulatory window.
const OVULATORY_DAYS: u32 = 3;

const FOLLICULAR_INFO: &str =
    "The body begins preparing for ovulation. Energy and mental clarity often increase.";

/// Catalog misconfiguration, detected when the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Catalog has no phase definitions")]
    Empty,

    #[error("Phase '{phase}' has an invalid day range: {reason}")]
    InvalidRange { phase: String, reason: String },

    #[error("Phase '{phase}' starts on day {found}, expected day {expected}")]
    Gap {
        phase: String,
        expected: u32,
        found: u32,
    },

    #[error("Phase '{phase}' starts on day {found}, overlapping the previous phase")]
    Overlap { phase: String, found: u32 },

    #[error("Catalog covers days 1-{covered} but the cycle has {cycle_length} days")]
    IncompleteCoverage { covered: u32, cycle_length: u32 },

    #[error("A {cycle_length}-day cycle with a {period_length}-day period cannot fit all four phases")]
    DoesNotFit {
        cycle_length: u32,
        period_length: u32,
    },
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        DomainError::new(ErrorCode::CatalogMisconfigured, err.to_string())
    }
}

/// Ordered phase definitions for a cycle of a given length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    phases: Vec<PhaseDefinition>,
    cycle_length: u32,
}

impl Catalog {
    /// Creates a catalog whose phases partition `1..=cycle_length`.
    ///
    /// Phases must appear in day order, be contiguous and not overlap.
    pub fn new(phases: Vec<PhaseDefinition>, cycle_length: u32) -> Result<Self, CatalogError> {
        if phases.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut covered: u32 = 0;
        for phase in &phases {
            let start = phase.days().start();
            // Nothing can follow a phase ending on the last representable day.
            let Some(expected) = covered.checked_add(1) else {
                return Err(CatalogError::Overlap {
                    phase: phase.name().to_string(),
                    found: start,
                });
            };
            if start > expected {
                return Err(CatalogError::Gap {
                    phase: phase.name().to_string(),
                    expected,
                    found: start,
                });
            }
            if start < expected {
                return Err(CatalogError::Overlap {
                    phase: phase.name().to_string(),
                    found: start,
                });
            }
            covered = phase.days().end();
        }

        if covered != cycle_length {
            return Err(CatalogError::IncompleteCoverage {
                covered,
                cycle_length,
            });
        }

        Ok(Self {
            phases,
            cycle_length,
        })
    }

    /// Creates a catalog without checking coverage.
    ///
    /// Days left uncovered resolve to no phase.
    pub fn unchecked(phases: Vec<PhaseDefinition>, cycle_length: u32) -> Self {
        let uncovered = (1..=cycle_length)
            .filter(|day| !phases.iter().any(|p| p.contains_day(*day)))
            .count();
        if uncovered > 0 {
            warn!(
                cycle_length,
                uncovered, "Catalog leaves cycle days without a phase"
            );
        }
        Self {
            phases,
            cycle_length,
        }
    }

    /// Builds the four-phase reference catalog for a profile.
    pub fn reference(profile: &UserProfile) -> Result<Self, CatalogError> {
        reference_catalog(profile.cycle_length(), profile.period_length())
    }

    pub fn phases(&self) -> &[PhaseDefinition] {
        &self.phases
    }

    pub fn cycle_length(&self) -> u32 {
        self.cycle_length
    }

    /// Looks up a phase by name.
    pub fn phase(&self, name: &str) -> Option<&PhaseDefinition> {
        self.phases.iter().find(|p| p.name() == name)
    }
}

/// Builds the reference catalog for the given cycle and period lengths.
///
/// Ovulation starts 14 days before the end of the cycle but never before
/// the follicular phase has at least one day.
pub fn reference_catalog(cycle_length: u32, period_length: u32) -> Result<Catalog, CatalogError> {
    let does_not_fit = || CatalogError::DoesNotFit {
        cycle_length,
        period_length,
    };

    // Menstrual, at least one follicular day, ovulatory window, one luteal day.
    let shortest_cycle = period_length.checked_add(OVULATORY_DAYS + 2);
    if period_length == 0 || shortest_cycle.map_or(true, |min| min > cycle_length) {
        return Err(does_not_fit());
    }

    // Both sums stay below cycle_length, which the check above bounds.
    let ovulation_start = cycle_length
        .saturating_sub(OVULATION_TO_CYCLE_END - 1)
        .max(period_length + 2);
    let ovulation_end = ovulation_start + OVULATORY_DAYS - 1;

    let range = |phase: &str, start: u32, end: u32| {
        DayRange::new(start, end).map_err(|e| CatalogError::InvalidRange {
            phase: phase.to_string(),
            reason: e.to_string(),
        })
    };

    let phases = vec![
        PhaseDefinition::standard(
            "Menstrual Phase",
            range("Menstrual Phase", 1, period_length)?,
            menstrual_foods(),
            ["Caffeine", "Processed foods", "Sugary snacks"],
        ),
        PhaseDefinition::educational(
            "Follicular Phase",
            range("Follicular Phase", period_length + 1, ovulation_start - 1)?,
            follicular_foods(),
            ["Excess sugar", "Alcohol", "Refined grains"],
            FOLLICULAR_INFO,
        ),
        PhaseDefinition::standard(
            "Ovulatory Phase",
            range("Ovulatory Phase", ovulation_start, ovulation_end)?,
            ovulatory_foods(),
            ["Fried foods", "High sodium", "Soft drinks"],
        ),
        PhaseDefinition::standard(
            "Luteal Phase",
            range("Luteal Phase", ovulation_end + 1, cycle_length)?,
            luteal_foods(),
            ["Salty snacks", "Heavy dairy", "Carbonated drinks"],
        ),
    ];

    Catalog::new(phases, cycle_length)
}

fn menstrual_foods() -> FoodGroups {
    FoodGroups::new()
        .with_group(
            "Fruits",
            [
                "berries", "apples", "grapes", "pomegranate", "watermelon", "plums", "cherries",
                "cranberries", "blackberries", "pears",
            ],
        )
        .with_group(
            "Proteins",
            [
                "lentils", "chicken", "eggs", "tofu", "turkey", "beef", "tempeh", "kidney beans",
                "sardines", "anchovies",
            ],
        )
        .with_group(
            "Greens",
            [
                "spinach", "kale", "chard", "broccoli", "cabbage", "seaweed", "parsley",
                "dandelion greens", "beet greens", "turnip greens",
            ],
        )
        .with_group(
            "Healthy Fats",
            [
                "avocado", "flax seeds", "chia seeds", "walnuts", "olive oil", "pumpkin seeds",
                "almonds", "pecans", "hemp seeds", "sunflower seeds",
            ],
        )
}

fn follicular_foods() -> FoodGroups {
    FoodGroups::new()
        .with_group(
            "Fruits",
            [
                "kiwi", "oranges", "papaya", "blueberries", "strawberries", "apples", "mango",
                "peaches", "nectarines", "cantaloupe",
            ],
        )
        .with_group(
            "Proteins",
            [
                "tempeh", "quinoa", "chickpeas", "shrimp", "tuna", "edamame", "eggs", "tofu",
                "turkey", "black beans",
            ],
        )
        .with_group(
            "Greens",
            [
                "arugula", "romaine", "bok choy", "asparagus", "zucchini", "green beans", "peas",
                "collard greens", "lettuce", "mustard greens",
            ],
        )
        .with_group(
            "Healthy Fats",
            [
                "pumpkin seeds", "sunflower seeds", "hemp seeds", "almonds", "avocado",
                "macadamia nuts", "cashews", "hazelnuts", "olive oil", "ghee",
            ],
        )
}

fn ovulatory_foods() -> FoodGroups {
    FoodGroups::new()
        .with_group(
            "Fruits",
            [
                "raspberries", "pineapple", "grapefruit", "apricots", "nectarines", "melon",
                "grapes", "persimmon", "passionfruit", "lime",
            ],
        )
        .with_group(
            "Proteins",
            [
                "turkey", "chicken breast", "tofu", "salmon", "edamame", "duck", "egg whites",
                "seitan", "lamb", "tuna",
            ],
        )
        .with_group(
            "Greens",
            [
                "lettuce", "green beans", "peas", "cucumber", "okra", "kale", "spinach", "chard",
                "celery", "artichokes",
            ],
        )
        .with_group(
            "Healthy Fats",
            [
                "olive oil", "macadamia nuts", "pecans", "hazelnuts", "almond butter",
                "pumpkin seeds", "flax oil", "avocado", "chia oil", "pine nuts",
            ],
        )
}

fn luteal_foods() -> FoodGroups {
    FoodGroups::new()
        .with_group(
            "Fruits",
            [
                "bananas", "figs", "dates", "mango", "plums", "apples", "cranberries",
                "dried apricots", "raisins", "grapes",
            ],
        )
        .with_group(
            "Proteins",
            [
                "sardines", "red beans", "tempeh", "lean beef", "hummus", "chicken", "lentils",
                "split peas", "eggs", "tofu",
            ],
        )
        .with_group(
            "Greens",
            [
                "brussels sprouts", "cauliflower", "leeks", "sweet potato", "beetroot", "carrots",
                "turnips", "kale", "green peas", "cabbage",
            ],
        )
        .with_group(
            "Healthy Fats",
            [
                "dark chocolate", "peanut butter", "sesame seeds", "cashews", "pumpkin seeds",
                "walnuts", "sunflower butter", "ghee", "avocado", "coconut oil",
            ],
        )
}
