//! GetDeveloper - Query handler for reading one profile by handle.

use std::sync::Arc;

use crate::domain::developer::{DeveloperProfile, GithubHandle};
use crate::ports::{ProfileStore, ProfileStoreError};

/// Query to get a profile by GitHub handle.
#[derive(Debug, Clone)]
pub struct GetDeveloperQuery {
    pub handle: GithubHandle,
}

/// Handler for getting a single profile.
pub struct GetDeveloperHandler {
    store: Arc<dyn ProfileStore>,
}

impl GetDeveloperHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetDeveloperQuery,
    ) -> Result<DeveloperProfile, ProfileStoreError> {
        self.store.get(&query.handle).await
    }
}
