//! Chat routes

use axum::{middleware, routing::post, Router};

use super::handlers;
use crate::auth::gate::require_session;

/// Creates and returns the chat router
///
/// # Routes
/// - `POST /api/chat` - AI chat relay (auth gated)
pub fn chat_routes() -> Router {
    Router::new()
        .route("/api/chat", post(handlers::chat))
        .route_layer(middleware::from_fn(require_session))
}
