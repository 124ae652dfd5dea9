//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `mongo` - MongoDB-backed profile store
//! - `memory` - Process-local profile store for tests and local runs
//! - `http` - axum REST API

pub mod http;
pub mod memory;
pub mod mongo;

pub use memory::InMemoryProfileStore;
pub use mongo::MongoProfileStore;
