//! In-memory adapters for tests and local development.

mod profile_store;

pub use profile_store::InMemoryProfileStore;
