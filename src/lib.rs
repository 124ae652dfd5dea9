//! Developer Profiles - HTTP CRUD service over a MongoDB collection.
//!
//! The crate is laid out as ports and adapters: `domain` holds the profile
//! record, `ports` the storage trait, `application` one handler per
//! operation, and `adapters` the MongoDB, in-memory and HTTP implementations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod server;
