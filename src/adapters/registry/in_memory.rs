//! In-Memory Profile Registry Adapter
//!
//! Stores profiles in a map keyed by normalized name. Contents live as long
//! as the registry value does.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::user::{registry_key, UserProfile};
use crate::ports::ProfileRegistry;

/// In-memory storage for registered profiles
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRegistry {
    profiles: Arc<RwLock<HashMap<String, UserProfile>>>,
}

impl InMemoryProfileRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding `profiles`; later duplicates win.
    pub fn with_profiles(profiles: impl IntoIterator<Item = UserProfile>) -> Self {
        let map = profiles
            .into_iter()
            .map(|p| (p.registry_key(), p))
            .collect();
        Self {
            profiles: Arc::new(RwLock::new(map)),
        }
    }

    /// Number of registered profiles
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }

    /// Clear all stored profiles (useful for tests)
    pub async fn clear(&self) {
        self.profiles.write().await.clear();
    }
}

#[async_trait]
impl ProfileRegistry for InMemoryProfileRegistry {
    async fn save(&self, profile: &UserProfile) -> Result<bool, DomainError> {
        let key = profile.registry_key();
        let replaced = self
            .profiles
            .write()
            .await
            .insert(key.clone(), profile.clone())
            .is_some();
        debug!(key = %key, replaced, "Saved profile");
        Ok(replaced)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<UserProfile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(&registry_key(name)).cloned())
    }

    async fn list_names(&self) -> Result<Vec<String>, DomainError> {
        let profiles = self.profiles.read().await;
        let mut entries: Vec<(&String, &UserProfile)> = profiles.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        Ok(entries.into_iter().map(|(_, p)| p.name().to_string()).collect())
    }
}

/// The four sample users the application starts with.
pub fn demo_profiles() -> Result<Vec<UserProfile>, ValidationError> {
    Ok(vec![
        UserProfile::from_registration("BAYA", "20-03-2025", 28, 5, "")?,
        UserProfile::from_registration("ANA", "18-03-2025", 29, 6, "Sugar")?,
        UserProfile::from_registration("MAÏTÉ", "15-03-2025", 27, 4, "Gluten")?,
        UserProfile::from_registration("MARGAUX", "22-03-2025", 30, 7, "Dairy")?,
    ])
}
