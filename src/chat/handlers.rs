//! Chat handler relaying prompts to the Gemini collaborator

use axum::extract::{Extension, Json};
use std::sync::Arc;
use tracing::{error, info, warn};

use super::models::{ChatRequest, ChatResponse};
use crate::common::{ApiError, AppState};
use crate::services::gemini::GeminiError;

/// POST /api/chat
/// Forwards the caller's message to Gemini and relays the generated text
///
/// # Request Body
/// ```json
/// {
///   "message": "..."
/// }
/// ```
///
/// # Response
/// ```json
/// {
///   "response": "...",
///   "model": "gemini-pro"
/// }
/// ```
pub async fn chat(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let message = match payload.message.as_deref().filter(|m| !m.trim().is_empty()) {
        Some(message) => message,
        None => {
            warn!("Chat request rejected: missing or empty message");
            return Err(ApiError::BadRequest("Message is required".to_string()));
        }
    };

    // Checked before the call so an unconfigured service is 503, not 500
    if !state.gemini_service.is_configured() {
        warn!("Chat request rejected: Gemini API key not configured");
        return Err(ApiError::ServiceUnavailable(
            "AI service not configured. Please set GEMINI_API_KEY.".to_string(),
        ));
    }

    let preview: String = message.chars().take(50).collect();
    info!(
        message_preview = %preview,
        message_len = message.len(),
        "Processing chat message"
    );

    let text = state
        .gemini_service
        .generate_content(message)
        .await
        .map_err(|e| match e {
            GeminiError::NotConfigured => ApiError::ServiceUnavailable(
                "AI service not configured. Please set GEMINI_API_KEY.".to_string(),
            ),
            other => {
                error!(error = %other, "Chat generation failed");
                ApiError::InternalServer("Failed to process request".to_string())
            }
        })?;

    Ok(Json(ChatResponse {
        response: text,
        model: state.gemini_service.model().to_string(),
    }))
}
