//! ReplaceDeveloper - Command handler for overwriting a profile.

use std::sync::Arc;

use crate::domain::developer::DeveloperProfile;
use crate::ports::{ProfileStore, ProfileStoreError};

/// Command to replace a profile wholesale.
///
/// The profile's own handle selects the document to overwrite.
#[derive(Debug, Clone)]
pub struct ReplaceDeveloperCommand {
    pub profile: DeveloperProfile,
}

/// Handler for replacing profiles.
pub struct ReplaceDeveloperHandler {
    store: Arc<dyn ProfileStore>,
}

impl ReplaceDeveloperHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: ReplaceDeveloperCommand) -> Result<(), ProfileStoreError> {
        self.store.replace(&cmd.profile).await?;
        tracing::info!(github_id = %cmd.profile.handle(), "replaced developer profile");
        Ok(())
    }
}
