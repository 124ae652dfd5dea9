//! ProfileStore port - persistence contract for developer profiles.

use async_trait::async_trait;

use crate::domain::developer::{DeveloperProfile, GithubHandle};

/// Errors returned by every profile store operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileStoreError {
    #[error("developer profile with github ID {0} does not exist")]
    NotFound(GithubHandle),

    #[error("developer profile with github ID {0} already exists")]
    DuplicateHandle(GithubHandle),

    #[error("store error: {0}")]
    Backend(String),
}

impl ProfileStoreError {
    /// Wraps any displayable backend failure.
    pub fn backend(err: impl std::fmt::Display) -> Self {
        ProfileStoreError::Backend(err.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ProfileStoreError::NotFound(_))
    }
}

/// Port for storing developer profiles keyed by GitHub handle.
///
/// Implementations must be safe to share across concurrently running requests.
/// Each operation touches at most one document.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Insert a new profile.
    ///
    /// # Returns
    /// The identifier generated by the store for the new document.
    async fn create(&self, profile: &DeveloperProfile) -> Result<String, ProfileStoreError>;

    /// Find the profile with the given handle.
    ///
    /// # Errors
    /// Returns `ProfileStoreError::NotFound` if no profile matches
    async fn get(&self, handle: &GithubHandle) -> Result<DeveloperProfile, ProfileStoreError>;

    /// Return every stored profile in the store's natural order.
    ///
    /// An empty store yields an empty vector.
    async fn list(&self) -> Result<Vec<DeveloperProfile>, ProfileStoreError>;

    /// Replace the profile matching `profile.handle()` wholesale.
    ///
    /// # Errors
    /// Returns `ProfileStoreError::NotFound` if no profile matches
    async fn replace(&self, profile: &DeveloperProfile) -> Result<(), ProfileStoreError>;

    /// Remove the profile with the given handle.
    ///
    /// # Errors
    /// Returns `ProfileStoreError::NotFound` if no profile matches
    async fn delete(&self, handle: &GithubHandle) -> Result<(), ProfileStoreError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), ProfileStoreError>;

    /// Release the underlying connection. Safe to call more than once.
    async fn close(&self);

    /// Release the connection without waiting for outstanding operations.
    ///
    /// Used once the shutdown grace period has run out.
    async fn close_now(&self) {
        self.close().await;
    }
}
