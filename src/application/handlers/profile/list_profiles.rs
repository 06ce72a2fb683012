//! ListProfiles - Query handler for registered profile names.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::ProfileRegistry;

/// Handler for listing registered profiles.
pub struct ListProfilesHandler {
    registry: Arc<dyn ProfileRegistry>,
}

impl ListProfilesHandler {
    pub fn new(registry: Arc<dyn ProfileRegistry>) -> Self {
        Self { registry }
    }

    pub async fn handle(&self) -> Result<Vec<String>, DomainError> {
        self.registry.list_names().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::registry::{demo_profiles, InMemoryProfileRegistry};

    #[tokio::test]
    async fn test_list_profiles_returns_demo_names() {
        let registry = Arc::new(InMemoryProfileRegistry::with_profiles(demo_profiles().unwrap()));
        let handler = ListProfilesHandler::new(registry);

        let names = handler.handle().await.unwrap();
        assert_eq!(names, vec!["ANA", "BAYA", "MARGAUX", "MAÏTÉ"]);
    }

    #[tokio::test]
    async fn test_list_profiles_empty_registry() {
        let handler = ListProfilesHandler::new(Arc::new(InMemoryProfileRegistry::new()));
        assert!(handler.handle().await.unwrap().is_empty());
    }
}
