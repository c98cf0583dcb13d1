// src/services/google.rs
use chrono::Utc;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::common::helpers::safe_token_log;

/// Google's ID-token introspection endpoint
/// Docs: https://developers.google.com/identity/sign-in/web/backend-auth
const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

#[derive(Debug, Error)]
pub enum GoogleAuthError {
    #[error("tokeninfo request failed: {0}")]
    RequestFailed(String),

    #[error("token rejected by tokeninfo endpoint (HTTP {0})")]
    TokenRejected(u16),

    #[error("malformed tokeninfo response: {0}")]
    MalformedResponse(String),

    #[error("token has expired")]
    Expired,

    #[error("token audience mismatch")]
    AudienceMismatch,

    #[error("token missing required claim: {0}")]
    MissingClaim(&'static str),
}

/// Identity attributes extracted from a verified Google ID token
#[derive(Debug, Clone)]
pub struct GoogleClaims {
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}

/// Verifies Google ID tokens against the tokeninfo endpoint
#[derive(Debug, Clone)]
pub struct GoogleVerifier {
    client: Client,
}

impl GoogleVerifier {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Verify an ID token and extract its identity claims.
    ///
    /// The token is sent to Google's tokeninfo endpoint; the returned payload
    /// is then checked locally for expiry and the expected audience.
    pub async fn verify_id_token(
        &self,
        id_token: &str,
        client_id: &str,
    ) -> Result<GoogleClaims, GoogleAuthError> {
        debug!(
            token = %safe_token_log(id_token),
            "Initiating Google token validation with tokeninfo endpoint"
        );

        let tokeninfo_url = format!(
            "{}?id_token={}",
            TOKENINFO_URL,
            urlencoding::encode(id_token)
        );

        let response = self.client.get(&tokeninfo_url).send().await.map_err(|e| {
            error!(
                error = %e,
                endpoint = TOKENINFO_URL,
                "HTTP error contacting Google tokeninfo endpoint"
            );
            GoogleAuthError::RequestFailed(e.to_string())
        })?;

        let status = response.status();
        debug!(http_status = %status, "Received response from Google tokeninfo endpoint");

        if !status.is_success() {
            warn!(
                http_status = %status,
                "Google tokeninfo rejected token"
            );
            return Err(GoogleAuthError::TokenRejected(status.as_u16()));
        }

        let body = response.json::<serde_json::Value>().await.map_err(|e| {
            error!(error = %e, "Failed to parse Google tokeninfo JSON response");
            GoogleAuthError::MalformedResponse(e.to_string())
        })?;

        Self::validate_claims(&body, client_id, Utc::now().timestamp())
    }

    /// Check the tokeninfo payload against the expected audience and the clock,
    /// then extract identity claims. `email` is required; `name` and `picture`
    /// are taken when present.
    fn validate_claims(
        body: &serde_json::Value,
        client_id: &str,
        now: i64,
    ) -> Result<GoogleClaims, GoogleAuthError> {
        // tokeninfo serializes numeric claims as strings
        let exp = body.get("exp").and_then(|v| {
            v.as_i64()
                .or_else(|| v.as_str().and_then(|s| s.parse::<i64>().ok()))
        });
        if let Some(exp) = exp {
            if exp < now {
                warn!(token_exp = exp, current_time = now, "Google token has expired");
                return Err(GoogleAuthError::Expired);
            }
        }

        match body.get("aud").and_then(|v| v.as_str()) {
            Some(aud) if aud == client_id => {
                debug!(token_audience = %aud, "Google token audience validation successful");
            }
            Some(aud) => {
                warn!(
                    token_audience = %aud,
                    expected_client_id = %client_id,
                    "Google token audience validation failed - rejecting token"
                );
                return Err(GoogleAuthError::AudienceMismatch);
            }
            None => {
                warn!(
                    expected_client_id = %client_id,
                    "Google token missing audience field - rejecting token"
                );
                return Err(GoogleAuthError::MissingClaim("aud"));
            }
        }

        let email = body
            .get("email")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or(GoogleAuthError::MissingClaim("email"))?;

        if let Some(email_verified) = body.get("email_verified") {
            // tokeninfo returns this claim as the string "true"/"false"
            let verified = email_verified.as_str().map(|v| v == "true").or_else(|| email_verified.as_bool());
            if verified == Some(false) {
                warn!("Google token contains unverified email address");
            }
        }

        let name = body
            .get("name")
            .and_then(|v| v.as_str())
            .map(str::to_string);
        let picture = body
            .get("picture")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        Ok(GoogleClaims {
            email,
            name,
            picture,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CLIENT_ID: &str = "client-123.apps.googleusercontent.com";
    const NOW: i64 = 1_700_000_000;

    fn valid_payload() -> serde_json::Value {
        json!({
            "aud": CLIENT_ID,
            "exp": (NOW + 3600).to_string(),
            "email": "user@example.com",
            "email_verified": "true",
            "name": "Test User",
            "picture": "https://example.com/photo.jpg",
            "sub": "1234567890"
        })
    }

    #[test]
    fn test_validate_claims_accepts_valid_payload() {
        let claims = GoogleVerifier::validate_claims(&valid_payload(), CLIENT_ID, NOW).unwrap();
        assert_eq!(claims.email, "user@example.com");
        assert_eq!(claims.name.as_deref(), Some("Test User"));
        assert_eq!(claims.picture.as_deref(), Some("https://example.com/photo.jpg"));
    }

    #[test]
    fn test_validate_claims_rejects_expired_token() {
        let mut payload = valid_payload();
        payload["exp"] = json!((NOW - 10).to_string());

        let result = GoogleVerifier::validate_claims(&payload, CLIENT_ID, NOW);
        assert!(matches!(result, Err(GoogleAuthError::Expired)));
    }

    #[test]
    fn test_validate_claims_rejects_wrong_audience() {
        let mut payload = valid_payload();
        payload["aud"] = json!("someone-else.apps.googleusercontent.com");

        let result = GoogleVerifier::validate_claims(&payload, CLIENT_ID, NOW);
        assert!(matches!(result, Err(GoogleAuthError::AudienceMismatch)));
    }

    #[test]
    fn test_validate_claims_rejects_missing_audience() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("aud");

        let result = GoogleVerifier::validate_claims(&payload, CLIENT_ID, NOW);
        assert!(matches!(result, Err(GoogleAuthError::MissingClaim("aud"))));
    }

    #[test]
    fn test_validate_claims_requires_email() {
        let mut payload = valid_payload();
        payload.as_object_mut().unwrap().remove("email");

        let result = GoogleVerifier::validate_claims(&payload, CLIENT_ID, NOW);
        assert!(matches!(result, Err(GoogleAuthError::MissingClaim("email"))));
    }

    #[test]
    fn test_validate_claims_tolerates_missing_profile_fields() {
        let mut payload = valid_payload();
        let obj = payload.as_object_mut().unwrap();
        obj.remove("name");
        obj.remove("picture");

        let claims = GoogleVerifier::validate_claims(&payload, CLIENT_ID, NOW).unwrap();
        assert!(claims.name.is_none());
        assert!(claims.picture.is_none());
    }

    #[test]
    fn test_validate_claims_accepts_unverified_email() {
        // Unverified email is logged but not rejected
        let mut payload = valid_payload();
        payload["email_verified"] = json!("false");

        let claims = GoogleVerifier::validate_claims(&payload, CLIENT_ID, NOW).unwrap();
        assert_eq!(claims.email, "user@example.com");
    }
}
