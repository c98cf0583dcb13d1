//! Cookie-backed session store
//!
//! Sessions live entirely inside a signed HttpOnly cookie: the user record is
//! encoded as an HS256 token with an expiry claim, so no server-side state
//! survives a restart and none is needed. Tampered or expired cookies simply
//! read back as "no session".

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::models::UserInfo;
use crate::common::{safe_email_log, ApiError};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

/// Signed session payload
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    email: String,
    name: String,
    picture: String,
    exp: usize,
}

/// Issues, reads, and clears the session cookie
#[derive(Debug, Clone)]
pub struct SessionStore {
    secret: String,
    ttl_hours: i64,
}

impl SessionStore {
    pub fn new(secret: String, ttl_hours: i64) -> Self {
        Self { secret, ttl_hours }
    }

    /// Read the current session, if any.
    ///
    /// Returns `None` for a missing, tampered, or expired cookie - the three
    /// cases are indistinguishable to callers.
    pub fn get(&self, jar: &CookieJar) -> Option<UserInfo> {
        let cookie = jar.get(SESSION_COOKIE)?;

        match decode::<SessionClaims>(
            cookie.value(),
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        ) {
            Ok(data) => {
                let claims = data.claims;
                debug!(
                    email = %safe_email_log(&claims.email),
                    "Session cookie accepted"
                );
                Some(UserInfo {
                    email: claims.email,
                    name: claims.name,
                    picture: claims.picture,
                })
            }
            Err(e) => {
                debug!(error = %e, "Session cookie rejected");
                None
            }
        }
    }

    /// Attach a fresh session for `user`, overwriting any existing one.
    pub fn set(&self, jar: CookieJar, user: &UserInfo) -> Result<CookieJar, ApiError> {
        let exp = (Utc::now() + Duration::hours(self.ttl_hours)).timestamp() as usize;
        let claims = SessionClaims {
            email: user.email.clone(),
            name: user.name.clone(),
            picture: user.picture.clone(),
            exp,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| {
            error!(error = %e, "Failed to sign session cookie");
            ApiError::InternalServer("Failed to establish session".to_string())
        })?;

        let cookie = Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();

        Ok(jar.add(cookie))
    }

    /// Drop the session. Idempotent: clearing an absent session is a no-op.
    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        jar.remove(Cookie::build(SESSION_COOKIE).path("/").build())
    }
}
