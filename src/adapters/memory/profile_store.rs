//! In-Memory Profile Store Adapter
//!
//! Keeps profiles in insertion order inside the process.
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::developer::{DeveloperProfile, GithubHandle};
use crate::ports::{ProfileStore, ProfileStoreError};

#[derive(Debug, Clone)]
struct StoredProfile {
    id: String,
    profile: DeveloperProfile,
}

/// In-memory storage for developer profiles
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    documents: Arc<RwLock<Vec<StoredProfile>>>,
    unique_handles: bool,
    closed: Arc<AtomicBool>,
}

impl InMemoryProfileStore {
    /// Create a new, empty store that accepts duplicate handles
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects a second profile with an existing handle,
    /// the way a collection with a unique index on `github_id` does
    pub fn with_unique_handles() -> Self {
        Self {
            unique_handles: true,
            ..Self::default()
        }
    }

    /// Get the number of stored profiles
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    /// Whether `close` has been called
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn create(&self, profile: &DeveloperProfile) -> Result<String, ProfileStoreError> {
        let mut documents = self.documents.write().await;
        if self.unique_handles && documents.iter().any(|d| d.profile.handle() == profile.handle()) {
            return Err(ProfileStoreError::DuplicateHandle(profile.handle().clone()));
        }

        let id = Uuid::new_v4().simple().to_string();
        documents.push(StoredProfile {
            id: id.clone(),
            profile: profile.clone(),
        });
        Ok(id)
    }

    async fn get(&self, handle: &GithubHandle) -> Result<DeveloperProfile, ProfileStoreError> {
        self.documents
            .read()
            .await
            .iter()
            .find(|d| d.profile.handle() == handle)
            .map(|d| d.profile.clone())
            .ok_or_else(|| ProfileStoreError::NotFound(handle.clone()))
    }

    async fn list(&self) -> Result<Vec<DeveloperProfile>, ProfileStoreError> {
        Ok(self
            .documents
            .read()
            .await
            .iter()
            .map(|d| d.profile.clone())
            .collect())
    }

    async fn replace(&self, profile: &DeveloperProfile) -> Result<(), ProfileStoreError> {
        let mut documents = self.documents.write().await;
        let stored = documents
            .iter_mut()
            .find(|d| d.profile.handle() == profile.handle())
            .ok_or_else(|| ProfileStoreError::NotFound(profile.handle().clone()))?;
        stored.profile = profile.clone();
        Ok(())
    }

    async fn delete(&self, handle: &GithubHandle) -> Result<(), ProfileStoreError> {
        let mut documents = self.documents.write().await;
        let pos = documents
            .iter()
            .position(|d| d.profile.handle() == handle)
            .ok_or_else(|| ProfileStoreError::NotFound(handle.clone()))?;
        let removed = documents.remove(pos);
        tracing::trace!(id = %removed.id, github_id = %handle, "removed in-memory profile");
        Ok(())
    }

    async fn ping(&self) -> Result<(), ProfileStoreError> {
        if self.is_closed() {
            return Err(ProfileStoreError::Backend("store is closed".to_string()));
        }
        Ok(())
    }

    async fn close(&self) {
        if self.closed.swap(true, Ordering::SeqCst) {
            tracing::debug!("in-memory profile store already closed");
        }
    }
}
