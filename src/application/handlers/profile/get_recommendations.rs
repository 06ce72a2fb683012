//! GetRecommendations - Query handler for a registered profile's recommendations.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::foundation::DomainError;
use crate::domain::recommendation::{RecommendationAssembler, RecommendationResult};
use crate::ports::ProfileRegistry;

/// Query for the recommendations of a registered profile.
#[derive(Debug, Clone)]
pub struct GetRecommendationsQuery {
    /// Profile name, matched case-insensitively.
    pub name: String,
    /// Calendar day to resolve the phase for, usually today.
    pub reference_day: NaiveDate,
}

/// Handler for looking up recommendations by profile name.
pub struct GetRecommendationsHandler {
    registry: Arc<dyn ProfileRegistry>,
}

impl GetRecommendationsHandler {
    pub fn new(registry: Arc<dyn ProfileRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(
        &self,
        query: GetRecommendationsQuery,
    ) -> Result<RecommendationResult, DomainError> {
        let profile = self
            .registry
            .find_by_name(&query.name)
            .await?
            .ok_or_else(|| DomainError::profile_not_found(query.name.trim()))?;

        let result = RecommendationAssembler::assemble(&profile, query.reference_day)?;
        debug!(
            name = profile.name(),
            cycle_day = result.cycle_day(),
            phase = result.phase_name(),
            "Assembled recommendations"
        );
        Ok(result)
    }
}
