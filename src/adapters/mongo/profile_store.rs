//! MongoDB adapter for ProfileStore

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::{Client, Collection};
use std::sync::atomic::{AtomicBool, Ordering};

use super::connection::{self, ConnectError};
use super::document::DeveloperDocument;
use crate::config::DatabaseConfig;
use crate::domain::developer::{DeveloperProfile, GithubHandle, GITHUB_ID_FIELD};
use crate::ports::{ProfileStore, ProfileStoreError};

/// Server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB implementation of ProfileStore
///
/// Holds the single client shared by every request. The driver pools
/// connections internally, so no extra locking happens here.
pub struct MongoProfileStore {
    client: Client,
    collection: Collection<DeveloperDocument>,
    closed: AtomicBool,
}

impl MongoProfileStore {
    /// Connect to the configured cluster and bind to the profile collection.
    ///
    /// # Errors
    ///
    /// Returns `ConnectError` if the connection string is invalid or the
    /// cluster does not answer a ping within the connect timeout.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, ConnectError> {
        let client =
            connection::connect_client(&config.connection_string, config.connect_timeout())
                .await?;
        Ok(Self::new(client, &config.name, &config.collection))
    }

    /// Wrap an already established client.
    pub fn new(client: Client, database: &str, collection: &str) -> Self {
        let collection = client.database(database).collection(collection);
        Self {
            client,
            collection,
            closed: AtomicBool::new(false),
        }
    }

    async fn shutdown(&self, immediate: bool) {
        if self.closed.swap(true, Ordering::SeqCst) {
            tracing::debug!("MongoDB client already closed");
            return;
        }
        self.client.clone().shutdown().immediate(immediate).await;
        tracing::info!(immediate, "disconnected from MongoDB");
    }
}

fn handle_filter(handle: &GithubHandle) -> Document {
    let mut filter = Document::new();
    filter.insert(GITHUB_ID_FIELD, handle.as_str());
    filter
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

fn inserted_id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl ProfileStore for MongoProfileStore {
    async fn create(&self, profile: &DeveloperProfile) -> Result<String, ProfileStoreError> {
        match self
            .collection
            .insert_one(DeveloperDocument::from(profile))
            .await {
            Ok(result) => Ok(inserted_id_to_string(&result.inserted_id)),
            Err(e) if is_duplicate_key(&e) => {
                Err(ProfileStoreError::DuplicateHandle(profile.handle().clone()))
            }
            Err(e) => Err(ProfileStoreError::backend(e)),
        }
    }

    async fn get(&self, handle: &GithubHandle) -> Result<DeveloperProfile, ProfileStoreError> {
        self.collection
            .find_one(handle_filter(handle))
            .await
            .map_err(ProfileStoreError::backend)?
            .map(DeveloperProfile::from)
            .ok_or_else(|| ProfileStoreError::NotFound(handle.clone()))
    }

    async fn list(&self) -> Result<Vec<DeveloperProfile>, ProfileStoreError> {
        let cursor = self
            .collection
            .find(Document::new())
            .await
            .map_err(ProfileStoreError::backend)?;

        let documents = cursor
            .try_collect::<Vec<_>>()
            .await
            .map_err(ProfileStoreError::backend)?;
        Ok(documents.into_iter().map(DeveloperProfile::from).collect())
    }

    async fn replace(&self, profile: &DeveloperProfile) -> Result<(), ProfileStoreError> {
        self.collection
            .find_one_and_replace(
                handle_filter(profile.handle()),
                DeveloperDocument::from(profile),
            )
            .await
            .map_err(ProfileStoreError::backend)?
            .map(|_| ())
            .ok_or_else(|| ProfileStoreError::NotFound(profile.handle().clone()))
    }

    async fn delete(&self, handle: &GithubHandle) -> Result<(), ProfileStoreError> {
        self.collection
            .find_one_and_delete(handle_filter(handle))
            .await
            .map_err(ProfileStoreError::backend)?
            .map(|_| ())
            .ok_or_else(|| ProfileStoreError::NotFound(handle.clone()))
    }

    async fn ping(&self) -> Result<(), ProfileStoreError> {
        connection::ping(&self.client)
            .await
            .map_err(ProfileStoreError::backend)
    }

    async fn close(&self) {
        self.shutdown(false).await;
    }

    /// Does not wait for abandoned requests to drop their cursors and sessions.
    async fn close_now(&self) {
        self.shutdown(true).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn handle_filter_matches_on_github_id() {
        let filter = handle_filter(&GithubHandle::new("alice").unwrap());
        assert_eq!(filter.len(), 1);
        assert_eq!(filter.get_str("github_id").unwrap(), "alice");
    }

    #[test]
    fn object_id_rendered_as_hex() {
        let oid = ObjectId::new();
        assert_eq!(inserted_id_to_string(&Bson::ObjectId(oid)), oid.to_hex());
        assert_eq!(
            inserted_id_to_string(&Bson::String("custom".to_string())),
            "custom"
        );
    }

    // Requires a reachable cluster:
    // MONGODB_CONNECTION_STRING=mongodb://localhost:27017 cargo test -- --ignored
    #[tokio::test]
    #[ignore = "Requires live MongoDB instance"]
    async fn crud_round_trip_against_live_mongodb() {
        let config = DatabaseConfig {
            connection_string: std::env::var("MONGODB_CONNECTION_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            name: "dev_profiles_test".to_string(),
            collection: format!("developers_{}", ObjectId::new().to_hex()),
            ..Default::default()
        };
        let store = MongoProfileStore::connect(&config).await.unwrap();
        let handle = GithubHandle::new("alice").unwrap();
        let alice = DeveloperProfile::new(handle.clone(), "a.dev", vec!["go".to_string()]);

        assert!(store.list().await.unwrap().is_empty());
        store.create(&alice).await.unwrap();
        assert_eq!(store.get(&handle).await.unwrap(), alice);

        let replaced = DeveloperProfile::new(handle.clone(), "", vec!["rust".to_string()]);
        store.replace(&replaced).await.unwrap();
        assert_eq!(store.get(&handle).await.unwrap(), replaced);

        store.delete(&handle).await.unwrap();
        assert!(store.get(&handle).await.unwrap_err().is_not_found());
        assert!(store.delete(&handle).await.unwrap_err().is_not_found());

        store.collection.drop().await.unwrap();
        store.close().await;
        store.close().await;
    }
}
