//! Cycle resolver - maps a calendar day to a cycle day and its phase.

use chrono::NaiveDate;
use tracing::debug;

use super::{Catalog, CatalogError, PhaseDefinition};
use crate::domain::user::UserProfile;

/// Whole days from the profile's cycle start to `reference_day`.
///
/// Negative when the start date lies after the reference day.
pub fn elapsed_days(profile: &UserProfile, reference_day: NaiveDate) -> i64 {
    reference_day
        .signed_duration_since(profile.cycle_start())
        .num_days()
}

/// 1-based day within the current cycle, always in `1..=cycle_length`.
///
/// Uses floor modulo, so a start date in the future still lands on a
/// valid day counted backwards from the start.
pub fn cycle_day(profile: &UserProfile, reference_day: NaiveDate) -> u32 {
    let length = i64::from(profile.cycle_length());
    let day = elapsed_days(profile, reference_day).rem_euclid(length) + 1;
    // rem_euclid keeps the value below cycle_length, which is a u32.
    day as u32
}

/// Resolves the active phase for a profile against an owned catalog.
#[derive(Debug, Clone)]
pub struct CycleResolver {
    catalog: Catalog,
}

impl CycleResolver {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Resolver over the reference catalog built for `profile`.
    pub fn for_profile(profile: &UserProfile) -> Result<Self, CatalogError> {
        Ok(Self::new(Catalog::reference(profile)?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// First phase, in catalog order, whose range contains `day`.
    pub fn phase_for_day(&self, day: u32) -> Option<&PhaseDefinition> {
        self.catalog.phases().iter().find(|p| p.contains_day(day))
    }

    /// Cycle day for `reference_day` and the phase covering it, if any.
    pub fn resolve<'a>(
        &'a self,
        profile: &UserProfile,
        reference_day: NaiveDate,
    ) -> Resolution<'a> {
        let day = cycle_day(profile, reference_day);
        let phase = self.phase_for_day(day);
        debug!(
            profile = profile.name(),
            cycle_day = day,
            phase = phase.map(|p| p.name()),
            "Resolved cycle phase"
        );
        Resolution {
            cycle_day: day,
            phase,
        }
    }
}

/// Outcome of resolving a calendar day against a catalog.
#[derive(Debug, Clone, Copy)]
pub struct Resolution<'a> {
    pub cycle_day: u32,
    /// `None` when no phase covers the cycle day.
    pub phase: Option<&'a PhaseDefinition>,
}
