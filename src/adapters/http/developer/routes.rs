//! Route configuration for developer endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    create_developer, delete_developer, get_developer, health, list_developers,
    replace_developer, DeveloperAppState,
};

/// Creates the developer router with all endpoints.
///
/// Routes:
/// - `POST /developers` - Create a profile
/// - `GET /developers` - List every profile
/// - `PUT /developers` - Replace the profile named in the body
/// - `GET /developers/:github` - Fetch one profile
/// - `DELETE /developers/:github` - Delete one profile
/// - `GET /health` - Store reachability
pub fn developer_router() -> Router<DeveloperAppState> {
    Router::new()
        .route(
            "/developers",
            get(list_developers)
                .post(create_developer)
                .put(replace_developer),
        )
        .route(
            "/developers/:github",
            get(get_developer).delete(delete_developer),
        )
        .route("/health", get(health))
}
