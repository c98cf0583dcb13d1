//! Auth gate middleware
//!
//! Applied at route registration to handlers that require a logged-in user.
//! When `REQUIRE_AUTH` is disabled the gate passes everything through - a
//! deliberate soft-launch mode for staging and demo deployments.

use axum::{
    extract::{Extension, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::common::{safe_email_log, ApiError, AppState};

/// Reject requests without a session when authentication is required.
///
/// Runs before the handler body; a 401 here short-circuits dispatch entirely.
pub async fn require_session(
    Extension(state): Extension<Arc<AppState>>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if !state.config.require_auth {
        debug!(
            path = %request.uri().path(),
            "Auth gate open: REQUIRE_AUTH is disabled"
        );
        return Ok(next.run(request).await);
    }

    match state.sessions.get(&jar) {
        Some(user) => {
            debug!(
                email = %safe_email_log(&user.email),
                path = %request.uri().path(),
                "Auth gate passed"
            );
            Ok(next.run(request).await)
        }
        None => {
            warn!(
                path = %request.uri().path(),
                "Auth gate rejected request without a valid session"
            );
            Err(ApiError::Unauthorized("Authentication required".to_string()))
        }
    }
}
