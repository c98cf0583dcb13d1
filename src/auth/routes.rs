//! Authentication routes

use axum::{routing::post, Router};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `POST /api/auth/verify` - Google ID token verification
/// - `POST /api/auth/logout` - Clear the session cookie
pub fn auth_routes() -> Router {
    Router::new()
        .route("/api/auth/verify", post(handlers::verify_token))
        .route("/api/auth/logout", post(handlers::logout))
}
