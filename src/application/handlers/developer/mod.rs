//! Developer profile application handlers.
//!
//! One command or query handler per profile store operation.

mod create_developer;
mod delete_developer;
mod get_developer;
mod list_developers;
mod replace_developer;

pub use create_developer::{CreateDeveloperCommand, CreateDeveloperHandler, CreateDeveloperResult};
pub use delete_developer::{DeleteDeveloperCommand, DeleteDeveloperHandler};
pub use get_developer::{GetDeveloperHandler, GetDeveloperQuery};
pub use list_developers::ListDevelopersHandler;
pub use replace_developer::{ReplaceDeveloperCommand, ReplaceDeveloperHandler};
