//! Landing page and health routes

use axum::{routing::get, Router};

use super::handlers;

/// Creates and returns the system router
///
/// # Routes
/// - `GET /` - Static landing page
/// - `GET /health` - Health check for readiness/liveness probes
pub fn system_routes() -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
}
