//! Authentication handlers

use axum::extract::{Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;
use tracing::{info, warn};

use super::models::{UserInfo, VerifyTokenRequest};
use crate::common::{safe_email_log, ApiError, AppState};

/// POST /api/auth/verify
/// Verifies a Google ID token and establishes a session
///
/// # Request Body
/// ```json
/// {
///   "token": "<google id token>"
/// }
/// ```
///
/// # Response
/// ```json
/// {
///   "success": true,
///   "user": { "email": "...", "name": "...", "picture": "..." }
/// }
/// ```
pub async fn verify_token(
    Extension(state): Extension<Arc<AppState>>,
    jar: CookieJar,
    Json(payload): Json<VerifyTokenRequest>,
) -> Result<(CookieJar, Json<serde_json::Value>), ApiError> {
    let token = payload.token.as_deref().filter(|t| !t.is_empty());
    let client_id = state.config.google_client_id.as_deref();

    let (token, client_id) = match (token, client_id) {
        (Some(token), Some(client_id)) => (token, client_id),
        (token, client_id) => {
            warn!(
                has_token = token.is_some(),
                client_id_configured = client_id.is_some(),
                "Token verification rejected: missing token or client id"
            );
            return Err(ApiError::BadRequest("Invalid request".to_string()));
        }
    };

    // Any verification failure surfaces uniformly as 401; the subtype only
    // reaches the server log.
    let claims = state
        .google_verifier
        .verify_id_token(token, client_id)
        .await
        .map_err(|e| {
            warn!(error = %e, "Token verification failed");
            ApiError::Unauthorized("Authentication failed".to_string())
        })?;

    let user = UserInfo {
        email: claims.email,
        name: claims.name.unwrap_or_default(),
        picture: claims.picture.unwrap_or_default(),
    };

    info!(
        email = %safe_email_log(&user.email),
        "User session established via Google sign-in"
    );

    let jar = state.sessions.set(jar, &user)?;
    let resp = serde_json::json!({
        "success": true,
        "user": user,
    });

    Ok((jar, Json(resp)))
}

/// POST /api/auth/logout
/// Clears the session cookie
///
/// Always succeeds, whether or not a session existed.
///
/// # Response
/// ```json
/// {
///   "success": true
/// }
/// ```
pub async fn logout(
    Extension(state): Extension<Arc<AppState>>,
    jar: CookieJar,
) -> (CookieJar, Json<serde_json::Value>) {
    info!("User logged out");
    (
        state.sessions.clear(jar),
        Json(serde_json::json!({ "success": true })),
    )
}
