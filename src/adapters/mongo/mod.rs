//! MongoDB adapters

mod connection;
mod document;
mod profile_store;

pub use connection::{connect_client, ConnectError};
pub use profile_store::MongoProfileStore;
