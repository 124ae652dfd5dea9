//! GitHub handle value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// External identity of a developer profile.
///
/// Used as the lookup key for read, replace and delete. Uniqueness is not
/// enforced here; it depends on whatever index policy the backing store has.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GithubHandle(String);

impl GithubHandle {
    /// Creates a handle, rejecting empty or whitespace-only input.
    pub fn new(handle: impl Into<String>) -> Result<Self, ValidationError> {
        let handle = handle.into();
        if handle.trim().is_empty() {
            return Err(ValidationError::empty_field("github_id"));
        }
        Ok(Self(handle))
    }

    /// Wraps a handle read back from the document store without validation.
    ///
    /// Documents written by earlier clients can carry an empty `github_id`;
    /// they still have to be listable.
    pub fn from_stored(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for GithubHandle {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GithubHandle> for String {
    fn from(handle: GithubHandle) -> Self {
        handle.0
    }
}

impl fmt::Display for GithubHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
