//! ProfileRegistry port for looking up registered profiles by name.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::user::UserProfile;

/// Registry of user profiles keyed by case-insensitive name.
///
/// Owned by the caller for the lifetime of a session; nothing survives a
/// process restart.
#[async_trait]
pub trait ProfileRegistry: Send + Sync {
    /// Stores a profile under its normalized name, replacing any profile
    /// already registered under that name.
    ///
    /// Returns `true` when an earlier profile was replaced. The check and the
    /// write happen as one operation.
    async fn save(&self, profile: &UserProfile) -> Result<bool, DomainError>;

    /// Finds a profile by name, ignoring case and surrounding whitespace.
    async fn find_by_name(&self, name: &str) -> Result<Option<UserProfile>, DomainError>;

    /// Display names of all registered profiles, sorted by key.
    async fn list_names(&self) -> Result<Vec<String>, DomainError>;

    /// Check if a profile is registered under `name`.
    async fn exists(&self, name: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_name(name).await?.is_some())
    }
}
