//! HTTP handlers for developer endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.
//! Error bodies are plain text; store failures are logged and never echoed.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::developer::{
    CreateDeveloperCommand, CreateDeveloperHandler, DeleteDeveloperCommand,
    DeleteDeveloperHandler, GetDeveloperHandler, GetDeveloperQuery, ListDevelopersHandler,
    ReplaceDeveloperCommand, ReplaceDeveloperHandler,
};
use crate::domain::developer::{DeveloperProfile, GithubHandle};
use crate::ports::{ProfileStore, ProfileStoreError};

use super::dto::{DeveloperRequest, DeveloperResponse};

const CREATE_FAILED: &str = "failed to create developer profile";
const OPERATION_FAILED: &str = "operation failed";

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state.
///
/// Cloned for each request; the store is the single connection handle
/// created at startup.
#[derive(Clone)]
pub struct DeveloperAppState {
    pub profile_store: Arc<dyn ProfileStore>,
}

impl DeveloperAppState {
    pub fn new(profile_store: Arc<dyn ProfileStore>) -> Self {
        Self { profile_store }
    }

    pub fn create_developer_handler(&self) -> CreateDeveloperHandler {
        CreateDeveloperHandler::new(self.profile_store.clone())
    }

    pub fn get_developer_handler(&self) -> GetDeveloperHandler {
        GetDeveloperHandler::new(self.profile_store.clone())
    }

    pub fn list_developers_handler(&self) -> ListDevelopersHandler {
        ListDevelopersHandler::new(self.profile_store.clone())
    }

    pub fn replace_developer_handler(&self) -> ReplaceDeveloperHandler {
        ReplaceDeveloperHandler::new(self.profile_store.clone())
    }

    pub fn delete_developer_handler(&self) -> DeleteDeveloperHandler {
        DeleteDeveloperHandler::new(self.profile_store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST / PUT / DELETE)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /developers - Create a developer profile
pub async fn create_developer(
    State(state): State<DeveloperAppState>,
    body: Bytes,
) -> Result<StatusCode, DeveloperApiError> {
    let profile = decode_profile(&body)?;

    state
        .create_developer_handler()
        .handle(CreateDeveloperCommand { profile })
        .await
        .map_err(|e| DeveloperApiError::from_store(e, CREATE_FAILED))?;

    Ok(StatusCode::CREATED)
}

/// PUT /developers - Replace the profile named by the body's `github_id`
pub async fn replace_developer(
    State(state): State<DeveloperAppState>,
    body: Bytes,
) -> Result<StatusCode, DeveloperApiError> {
    let profile = decode_profile(&body)?;

    state
        .replace_developer_handler()
        .handle(ReplaceDeveloperCommand { profile })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /developers/:github - Delete a developer profile
pub async fn delete_developer(
    State(state): State<DeveloperAppState>,
    Path(github): Path<String>,
) -> Result<StatusCode, DeveloperApiError> {
    let handle = parse_handle(github)?;

    state
        .delete_developer_handler()
        .handle(DeleteDeveloperCommand { handle })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /developers/:github - Fetch one developer profile
pub async fn get_developer(
    State(state): State<DeveloperAppState>,
    Path(github): Path<String>,
) -> Result<Json<DeveloperResponse>, DeveloperApiError> {
    let handle = parse_handle(github)?;

    let profile = state
        .get_developer_handler()
        .handle(GetDeveloperQuery { handle })
        .await?;

    Ok(Json(profile.into()))
}

/// GET /developers - Fetch every developer profile
pub async fn list_developers(
    State(state): State<DeveloperAppState>,
) -> Result<Json<Vec<DeveloperResponse>>, DeveloperApiError> {
    let profiles = state.list_developers_handler().handle().await?;

    Ok(Json(profiles.into_iter().map(Into::into).collect()))
}

/// GET /health - Report whether the profile store is reachable
pub async fn health(State(state): State<DeveloperAppState>) -> Response {
    match state.profile_store.ping().await {
        Ok(()) => (StatusCode::OK, "ok").into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            DeveloperApiError::Unavailable.into_response()
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Decoding helpers
// ════════════════════════════════════════════════════════════════════════════════

fn decode_profile(body: &[u8]) -> Result<DeveloperProfile, DeveloperApiError> {
    let request: DeveloperRequest = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "rejected malformed developer body");
        DeveloperApiError::BadRequest(format!("invalid developer profile: {}", e))
    })?;

    request
        .into_profile()
        .map_err(|e| DeveloperApiError::BadRequest(e.to_string()))
}

/// A blank path segment can never name a stored profile, so it is reported
/// as missing.
fn parse_handle(github: String) -> Result<GithubHandle, DeveloperApiError> {
    GithubHandle::new(github.as_str()).map_err(|_| {
        DeveloperApiError::NotFound(
            ProfileStoreError::NotFound(GithubHandle::from_stored(github)).to_string(),
        )
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type for developer endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeveloperApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Internal(&'static str),
    Unavailable,
}

impl DeveloperApiError {
    /// Map a store error, using `internal_message` as the body for backend faults.
    pub fn from_store(err: ProfileStoreError, internal_message: &'static str) -> Self {
        match err {
            ProfileStoreError::NotFound(_) => {
                tracing::info!(error = %err, "developer profile not found");
                DeveloperApiError::NotFound(err.to_string())
            }
            ProfileStoreError::DuplicateHandle(_) => {
                tracing::info!(error = %err, "duplicate developer profile");
                DeveloperApiError::Conflict(err.to_string())
            }
            ProfileStoreError::Backend(_) => {
                tracing::error!(error = %err, "profile store operation failed");
                DeveloperApiError::Internal(internal_message)
            }
        }
    }
}

impl From<ProfileStoreError> for DeveloperApiError {
    fn from(err: ProfileStoreError) -> Self {
        DeveloperApiError::from_store(err, OPERATION_FAILED)
    }
}

impl IntoResponse for DeveloperApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            DeveloperApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            DeveloperApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            DeveloperApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            DeveloperApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg.to_string())
            }
            DeveloperApiError::Unavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "profile store unavailable".to_string(),
            ),
        };

        (status, message).into_response()
    }
}
