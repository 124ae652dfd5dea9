//! DeveloperProfile record.

use serde::{Deserialize, Deserializer, Serialize};

use super::GithubHandle;

/// Field name of the handle in both the wire and the persisted representation.
pub const GITHUB_ID_FIELD: &str = "github_id";

/// Reads an explicit `null` the same way as a missing field.
///
/// Use together with `#[serde(default)]`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A developer profile: handle, blog URL and skill tags.
///
/// The same field names are used on the wire and in the document store, so
/// this type is serialized directly into the collection. Extra fields such as
/// the store's `_id` are ignored on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperProfile {
    github_id: GithubHandle,
    #[serde(default, deserialize_with = "null_as_default")]
    blog: String,
    #[serde(default, deserialize_with = "null_as_default")]
    skills: Vec<String>,
}

impl DeveloperProfile {
    pub fn new(github_id: GithubHandle, blog: impl Into<String>, skills: Vec<String>) -> Self {
        Self {
            github_id,
            blog: blog.into(),
            skills,
        }
    }

    pub fn handle(&self) -> &GithubHandle {
        &self.github_id
    }

    pub fn blog(&self) -> &str {
        &self.blog
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Splits the record into its parts.
    pub fn into_parts(self) -> (GithubHandle, String, Vec<String>) {
        (self.github_id, self.blog, self.skills)
    }
}
