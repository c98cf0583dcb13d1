//! Authentication data models

use serde::{Deserialize, Serialize};

/// Identity record attached to a session
///
/// Replaced wholesale on re-login; a session either carries one complete
/// record or none at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub email: String,
    pub name: String,
    pub picture: String,
}

/// Request body for `POST /api/auth/verify`
#[derive(Debug, Deserialize)]
pub struct VerifyTokenRequest {
    pub token: Option<String>,
}
