//! HTTP adapters - REST API implementations.

pub mod developer;

use axum::http::StatusCode;
use axum::Router;
use tower_http::trace::TraceLayer;

pub use developer::{developer_router, DeveloperAppState};

async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Build the complete application router with request tracing.
pub fn app_router(state: DeveloperAppState) -> Router {
    developer_router()
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
