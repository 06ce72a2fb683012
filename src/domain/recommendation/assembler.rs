//! Recommendation assembler - turns a profile and a day into a result.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::cycle::{CatalogError, CycleResolver, FoodGroups};
use crate::domain::user::UserProfile;

/// Text shown for a category whose foods were all filtered out.
pub const NO_SAFE_FOODS: &str = "No safe foods";

/// Recommendations for a resolved phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseRecommendation {
    pub profile_name: String,
    pub cycle_day: u32,
    pub phase_name: String,
    /// Explanatory note; only educational phases carry one.
    pub info: Option<String>,
    pub groups: FoodGroups,
    pub avoid: Vec<String>,
}

/// Outcome of assembling recommendations for one profile and day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecommendationResult {
    Determined(PhaseRecommendation),
    /// No phase covers the cycle day.
    Undetermined { profile_name: String, cycle_day: u32 },
}

impl RecommendationResult {
    pub fn is_undetermined(&self) -> bool {
        matches!(self, Self::Undetermined { .. })
    }

    pub fn profile_name(&self) -> &str {
        match self {
            Self::Determined(rec) => &rec.profile_name,
            Self::Undetermined { profile_name, .. } => profile_name,
        }
    }

    pub fn cycle_day(&self) -> u32 {
        match self {
            Self::Determined(rec) => rec.cycle_day,
            Self::Undetermined { cycle_day, .. } => *cycle_day,
        }
    }

    pub fn phase_name(&self) -> Option<&str> {
        match self {
            Self::Determined(rec) => Some(&rec.phase_name),
            Self::Undetermined { .. } => None,
        }
    }

    pub fn info(&self) -> Option<&str> {
        match self {
            Self::Determined(rec) => rec.info.as_deref(),
            Self::Undetermined { .. } => None,
        }
    }

    pub fn recommendation(&self) -> Option<&PhaseRecommendation> {
        match self {
            Self::Determined(rec) => Some(rec),
            Self::Undetermined { .. } => None,
        }
    }

    /// Plain-text rendering, one line per entry.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("User: {}", self.profile_name())];
        match self {
            Self::Determined(rec) => {
                lines.push(format!("Current Phase: {}", rec.phase_name));
                if let Some(info) = &rec.info {
                    lines.push(format!("Phase Info: {}", info));
                }
                lines.push("Recommended Foods:".to_string());
                for group in &rec.groups {
                    let foods = if group.foods.is_empty() {
                        NO_SAFE_FOODS.to_string()
                    } else {
                        group.foods.join(", ")
                    };
                    lines.push(format!("  {}: {}", group.category, foods));
                }
                lines.push(format!("Foods to Avoid: {}", rec.avoid.join(", ")));
            }
            Self::Undetermined { .. } => {
                lines.push("Could not determine the phase.".to_string());
            }
        }
        lines
    }
}

/// Assembles filtered recommendations for a profile.
pub struct RecommendationAssembler;

impl RecommendationAssembler {
    /// Assembles against the profile's reference catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the reference catalog cannot be built for
    /// the profile's cycle and period lengths.
    pub fn assemble(
        profile: &UserProfile,
        reference_day: NaiveDate,
    ) -> Result<RecommendationResult, CatalogError> {
        let resolver = CycleResolver::for_profile(profile)?;
        Ok(Self::assemble_with(profile, &resolver, reference_day))
    }

    /// Assembles against a caller-supplied resolver.
    pub fn assemble_with(
        profile: &UserProfile,
        resolver: &CycleResolver,
        reference_day: NaiveDate,
    ) -> RecommendationResult {
        let resolution = resolver.resolve(profile, reference_day);
        let day = resolution.cycle_day;
        let Some(phase) = resolution.phase else {
            return RecommendationResult::Undetermined {
                profile_name: profile.name().to_string(),
                cycle_day: day,
            };
        };

        RecommendationResult::Determined(PhaseRecommendation {
            profile_name: profile.name().to_string(),
            cycle_day: day,
            phase_name: phase.name().to_string(),
            info: phase.info().map(str::to_string),
            groups: phase.filter_recommendations(profile.preferences()),
            avoid: phase.avoid().to_vec(),
        })
    }
}
