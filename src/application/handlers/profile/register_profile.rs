//! RegisterProfile - Command handler for registering user profiles.

use std::sync::Arc;

use tracing::info;

use crate::domain::cycle::Catalog;
use crate::domain::foundation::DomainError;
use crate::domain::user::UserProfile;
use crate::ports::ProfileRegistry;

/// Raw profile fields as entered in a form or at the prompt.
#[derive(Debug, Clone)]
pub struct ProfileInput {
    pub name: String,
    /// `DD-MM-YYYY`
    pub cycle_start: String,
    pub cycle_length: u32,
    pub period_length: u32,
    /// Comma-separated allergens, may be empty.
    pub allergens: String,
}

impl ProfileInput {
    /// Validates the input and checks that the reference catalog fits the
    /// profile's cycle.
    pub fn into_profile(self) -> Result<UserProfile, DomainError> {
        let profile = UserProfile::from_registration(
            &self.name,
            &self.cycle_start,
            self.cycle_length,
            self.period_length,
            &self.allergens,
        )?;
        Catalog::reference(&profile)?;
        Ok(profile)
    }
}

/// Command to register a profile.
#[derive(Debug, Clone)]
pub struct RegisterProfileCommand {
    pub input: ProfileInput,
}

/// Result of successful registration.
#[derive(Debug, Clone)]
pub struct RegisterProfileResult {
    pub profile: UserProfile,
    /// True if a profile with the same name was replaced.
    pub replaced: bool,
}

/// Handler for registering profiles.
pub struct RegisterProfileHandler {
    registry: Arc<dyn ProfileRegistry>,
}

impl RegisterProfileHandler {
    pub fn new(registry: Arc<dyn ProfileRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(
        &self,
        cmd: RegisterProfileCommand,
    ) -> Result<RegisterProfileResult, DomainError> {
        // 1. Validate and build the profile
        let profile = cmd.input.into_profile()?;

        // 2. Persist, learning whether an earlier registration was replaced
        let replaced = self.registry.save(&profile).await?;

        info!(
            name = profile.name(),
            cycle_length = profile.cycle_length(),
            period_length = profile.period_length(),
            replaced,
            "Registered profile"
        );

        Ok(RegisterProfileResult { profile, replaced })
    }
}
