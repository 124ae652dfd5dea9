//! Developer module - the profile record kept in the document store.
//!
//! # Domain Invariants
//!
//! 1. Every profile written by this service has a non-empty GitHub handle
//! 2. The wire and persisted shapes share field names (`github_id`, `blog`, `skills`)
//! 3. Updates replace the whole record, never merge

pub mod handle;
pub mod profile;

pub use handle::GithubHandle;
pub use profile::{null_as_default, DeveloperProfile, GITHUB_ID_FIELD};
