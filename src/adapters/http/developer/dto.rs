//! HTTP DTOs for developer endpoints.
//!
//! These types decouple the HTTP API from domain types. The field names match
//! the persisted document exactly.

use serde::{Deserialize, Serialize};

use crate::domain::developer::{null_as_default, DeveloperProfile, GithubHandle};
use crate::domain::foundation::ValidationError;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /developers` and `PUT /developers`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeveloperRequest {
    pub github_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub blog: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
}

impl DeveloperRequest {
    /// Convert into the domain record, enforcing a non-empty handle.
    pub fn into_profile(self) -> Result<DeveloperProfile, ValidationError> {
        let handle = GithubHandle::new(self.github_id)?;
        Ok(DeveloperProfile::new(handle, self.blog, self.skills))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A developer profile as returned by `GET /developers[/:github]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperResponse {
    pub github_id: String,
    pub blog: String,
    pub skills: Vec<String>,
}

impl From<DeveloperProfile> for DeveloperResponse {
    fn from(profile: DeveloperProfile) -> Self {
        let (handle, blog, skills) = profile.into_parts();
        Self {
            github_id: handle.into(),
            blog,
            skills,
        }
    }
}
