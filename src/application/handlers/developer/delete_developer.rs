//! DeleteDeveloper - Command handler for removing a profile.

use std::sync::Arc;

use crate::domain::developer::GithubHandle;
use crate::ports::{ProfileStore, ProfileStoreError};

/// Command to delete a profile by handle.
#[derive(Debug, Clone)]
pub struct DeleteDeveloperCommand {
    pub handle: GithubHandle,
}

/// Handler for deleting profiles.
pub struct DeleteDeveloperHandler {
    store: Arc<dyn ProfileStore>,
}

impl DeleteDeveloperHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteDeveloperCommand) -> Result<(), ProfileStoreError> {
        self.store.delete(&cmd.handle).await?;
        tracing::info!(github_id = %cmd.handle, "deleted developer profile");
        Ok(())
    }
}
