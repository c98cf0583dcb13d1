// src/services/gemini.rs
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Gemini API base URL
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("Gemini API key not configured")]
    NotConfigured,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Gemini API error (HTTP {status}): {body}")]
    ApiError { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Text generation against the Gemini `generateContent` endpoint.
///
/// The service is constructed whether or not an API key is available; an
/// unconfigured instance reports `is_configured() == false` and fails every
/// generation call with `GeminiError::NotConfigured`.
#[derive(Debug)]
pub struct GeminiService {
    api_key: Option<String>,
    model: String,
    client: Client,
}

impl GeminiService {
    pub fn new(api_key: Option<String>, model: String, client: Client) -> Self {
        Self {
            api_key,
            model,
            client,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// The model identifier used for generation, echoed back to API callers.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text for a prompt.
    pub async fn generate_content(&self, prompt: &str) -> Result<String, GeminiError> {
        let api_key = self.api_key.as_deref().ok_or(GeminiError::NotConfigured)?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            GEMINI_API_BASE, self.model, api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to send Gemini generation request");
                GeminiError::RequestFailed(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                http_status = %status,
                error = %body,
                "Gemini API returned error status"
            );
            return Err(GeminiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let api_response = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to parse Gemini response");
                GeminiError::InvalidResponse(e.to_string())
            })?;

        let text = Self::extract_text(api_response)?;
        info!(
            model = %self.model,
            response_len = text.len(),
            "Gemini generation successful"
        );
        Ok(text)
    }

    /// Pull the generated text out of the first candidate.
    fn extract_text(response: GenerateContentResponse) -> Result<String, GeminiError> {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| {
                GeminiError::InvalidResponse("response contained no candidates".to_string())
            })
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Content,
    #[serde(default)]
    #[allow(dead_code)]
    finish_reason: Option<String>,
}
