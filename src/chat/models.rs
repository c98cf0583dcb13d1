//! Chat data models

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/chat`
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

/// Response body for `POST /api/chat`
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub model: String,
}
