//! ComputeRecommendations - Query handler for a one-off form submission.
//!
//! The profile is validated and used once; it is not registered.

use chrono::NaiveDate;

use super::ProfileInput;
use crate::domain::foundation::DomainError;
use crate::domain::recommendation::{RecommendationAssembler, RecommendationResult};

/// Query carrying unregistered profile fields.
#[derive(Debug, Clone)]
pub struct ComputeRecommendationsQuery {
    pub input: ProfileInput,
    pub reference_day: NaiveDate,
}

/// Handler for ad-hoc recommendations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeRecommendationsHandler;

impl ComputeRecommendationsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        query: ComputeRecommendationsQuery,
    ) -> Result<RecommendationResult, DomainError> {
        let profile = query.input.into_profile()?;
        Ok(RecommendationAssembler::assemble(&profile, query.reference_day)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn query(allergens: &str, reference_day: NaiveDate) -> ComputeRecommendationsQuery {
        ComputeRecommendationsQuery {
            input: ProfileInput {
                name: "Guest".to_string(),
                cycle_start: "01-04-2025".to_string(),
                cycle_length: 28,
                period_length: 5,
                allergens: allergens.to_string(),
            },
            reference_day,
        }
    }

    #[test]
    fn computes_luteal_recommendations_without_allergens() {
        let day = NaiveDate::from_ymd_opt(2025, 4, 20).unwrap();
        let result = ComputeRecommendationsHandler::new()
            .handle(query("", day))
            .unwrap();

        assert_eq!(result.cycle_day(), 20);
        assert_eq!(result.phase_name(), Some("Luteal Phase"));
        assert!(result.info().is_none());
    }

    #[test]
    fn applies_allergens_case_insensitively() {
        let day = NaiveDate::from_ymd_opt(2025, 4, 16).unwrap();
        let result = ComputeRecommendationsHandler::new()
            .handle(query("SALMON, Tofu", day))
            .unwrap();

        let proteins = result.recommendation().unwrap().groups.get("Proteins").unwrap();
        assert!(!proteins.iter().any(|p| p == "salmon" || p == "tofu"));
        assert_eq!(proteins.len(), 8);
    }

    #[test]
    fn rejects_blank_name() {
        let mut q = query("", NaiveDate::from_ymd_opt(2025, 4, 20).unwrap());
        q.input.name = "   ".to_string();
        let err = ComputeRecommendationsHandler::new().handle(q).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
