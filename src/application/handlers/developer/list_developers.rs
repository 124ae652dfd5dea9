//! ListDevelopers - Query handler for listing every profile.

use std::sync::Arc;

use crate::domain::developer::DeveloperProfile;
use crate::ports::{ProfileStore, ProfileStoreError};

/// Handler for listing profiles. No filtering, no pagination.
pub struct ListDevelopersHandler {
    store: Arc<dyn ProfileStore>,
}

impl ListDevelopersHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<DeveloperProfile>, ProfileStoreError> {
        let profiles = self.store.list().await?;
        tracing::debug!(count = profiles.len(), "listed developer profiles");
        Ok(profiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProfileStore;
    use crate::domain::developer::GithubHandle;

    #[tokio::test]
    async fn test_list_developers_empty() {
        let handler = ListDevelopersHandler::new(Arc::new(InMemoryProfileStore::new()));
        assert!(handler.handle().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_developers_returns_all() {
        let store = Arc::new(InMemoryProfileStore::new());
        for h in ["a", "b", "c"] {
            store
                .create(&DeveloperProfile::new(GithubHandle::new(h).unwrap(), "", vec![]))
                .await
                .unwrap();
        }

        let handler = ListDevelopersHandler::new(store);
        assert_eq!(handler.handle().await.unwrap().len(), 3);
    }
}
