//! HTTP adapter for developer profile endpoints.
//!
//! - `POST /developers` - Create a profile
//! - `GET /developers` - List profiles
//! - `PUT /developers` - Replace a profile
//! - `GET /developers/:github` - Fetch a profile
//! - `DELETE /developers/:github` - Delete a profile

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{DeveloperRequest, DeveloperResponse};
pub use handlers::{DeveloperApiError, DeveloperAppState};
pub use routes::developer_router;
