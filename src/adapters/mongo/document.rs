//! Persisted shape of a developer profile.

use serde::{Deserialize, Serialize};

use crate::domain::developer::{null_as_default, DeveloperProfile, GithubHandle};

/// A profile document as stored in the collection.
///
/// Reads are lenient: older writers stored `null` for an empty skill list and
/// could leave `github_id` empty. Such documents still load instead of
/// failing the whole query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(super) struct DeveloperDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    github_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    blog: String,
    #[serde(default, deserialize_with = "null_as_default")]
    skills: Vec<String>,
}

impl From<&DeveloperProfile> for DeveloperDocument {
    fn from(profile: &DeveloperProfile) -> Self {
        Self {
            github_id: profile.handle().as_str().to_string(),
            blog: profile.blog().to_string(),
            skills: profile.skills().to_vec(),
        }
    }
}

impl From<DeveloperDocument> for DeveloperProfile {
    fn from(doc: DeveloperDocument) -> Self {
        DeveloperProfile::new(GithubHandle::from_stored(doc.github_id), doc.blog, doc.skills)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, from_document, oid::ObjectId, to_document, Bson};

    #[test]
    fn writes_shared_field_names() {
        let profile = DeveloperProfile::new(
            GithubHandle::new("alice").unwrap(),
            "a.dev",
            vec!["go".to_string()],
        );
        let written = to_document(&DeveloperDocument::from(&profile)).unwrap();
        assert_eq!(
            written,
            doc! { "github_id": "alice", "blog": "a.dev", "skills": ["go"] }
        );
    }

    #[test]
    fn reads_back_what_it_writes() {
        let profile = DeveloperProfile::new(
            GithubHandle::new("bob").unwrap(),
            "",
            vec!["rust".to_string(), "rust".to_string()],
        );
        let written = to_document(&DeveloperDocument::from(&profile)).unwrap();
        let read: DeveloperDocument = from_document(written).unwrap();
        assert_eq!(DeveloperProfile::from(read), profile);
    }

    #[test]
    fn null_skills_read_as_empty() {
        let read: DeveloperDocument = from_document(doc! {
            "_id": ObjectId::new(),
            "github_id": "carol",
            "blog": "c.dev",
            "skills": Bson::Null,
        })
        .unwrap();

        let profile = DeveloperProfile::from(read);
        assert_eq!(profile.handle().as_str(), "carol");
        assert_eq!(profile.blog(), "c.dev");
        assert!(profile.skills().is_empty());
    }

    #[test]
    fn zero_valued_document_still_loads() {
        let read: DeveloperDocument = from_document(doc! {
            "_id": ObjectId::new(),
            "github_id": "",
            "blog": "",
            "skills": Bson::Null,
        })
        .unwrap();

        let profile = DeveloperProfile::from(read);
        assert_eq!(profile.handle().as_str(), "");
        assert!(profile.skills().is_empty());
    }

    #[test]
    fn missing_fields_read_as_empty() {
        let read: DeveloperDocument = from_document(doc! { "_id": ObjectId::new() }).unwrap();
        assert_eq!(DeveloperProfile::from(read).blog(), "");
    }
}
