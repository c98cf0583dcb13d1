// Application state shared across all modules

use std::sync::Arc;

use crate::auth::session::SessionStore;
use crate::common::config::AppConfig;
use crate::services::{GeminiService, GoogleVerifier};

/// Application state containing configuration and collaborator services
///
/// Built once in `main` and handed to handlers through an `Extension`.
pub struct AppState {
    pub config: AppConfig,
    pub google_verifier: Arc<GoogleVerifier>,
    pub gemini_service: Arc<GeminiService>,
    pub sessions: SessionStore,
}
