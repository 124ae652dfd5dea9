//! CreateDeveloper - Command handler for inserting a developer profile.

use std::sync::Arc;

use crate::domain::developer::DeveloperProfile;
use crate::ports::{ProfileStore, ProfileStoreError};

/// Command to create a developer profile.
#[derive(Debug, Clone)]
pub struct CreateDeveloperCommand {
    pub profile: DeveloperProfile,
}

/// Result of profile creation.
#[derive(Debug, Clone)]
pub struct CreateDeveloperResult {
    /// Identifier generated by the store.
    pub inserted_id: String,
}

/// Handler for creating profiles.
pub struct CreateDeveloperHandler {
    store: Arc<dyn ProfileStore>,
}

impl CreateDeveloperHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: CreateDeveloperCommand,
    ) -> Result<CreateDeveloperResult, ProfileStoreError> {
        let inserted_id = self.store.create(&cmd.profile).await?;

        tracing::info!(
            inserted_id = %inserted_id,
            github_id = %cmd.profile.handle(),
            "inserted developer profile"
        );

        Ok(CreateDeveloperResult { inserted_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProfileStore;
    use crate::domain::developer::GithubHandle;

    fn alice() -> DeveloperProfile {
        DeveloperProfile::new(
            GithubHandle::new("alice").unwrap(),
            "a.dev",
            vec!["go".to_string()],
        )
    }

    #[tokio::test]
    async fn test_create_developer_success() {
        let store = Arc::new(InMemoryProfileStore::new());
        let handler = CreateDeveloperHandler::new(store.clone());

        let result = handler
            .handle(CreateDeveloperCommand { profile: alice() })
            .await
            .unwrap();

        assert!(!result.inserted_id.is_empty());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_create_developer_duplicate_handle() {
        let store = Arc::new(InMemoryProfileStore::with_unique_handles());
        let handler = CreateDeveloperHandler::new(store.clone());

        handler
            .handle(CreateDeveloperCommand { profile: alice() })
            .await
            .unwrap();
        let result = handler
            .handle(CreateDeveloperCommand { profile: alice() })
            .await;

        assert!(matches!(result, Err(ProfileStoreError::DuplicateHandle(_))));
        assert_eq!(store.len().await, 1);
    }
}
