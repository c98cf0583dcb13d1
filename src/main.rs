// src/main.rs
use axum::{extract::Extension, middleware, Router};
use dotenv::dotenv;
use reqwest::Client;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod auth;
mod chat;
mod common;
mod logging_middleware;
mod services;
mod system;

// ============================================================================
// COMMON IMPORTS
// ============================================================================

use auth::session::SessionStore;
use common::{AppConfig, AppState};
use services::{GeminiService, GoogleVerifier};

// ============================================================================
// ROUTER COMPOSITION
// ============================================================================

/// Compose the full application router around a prepared state
pub fn build_app(state: Arc<AppState>) -> Router {
    let debug = state.config.debug;

    let cors = {
        let origins: Vec<axum::http::HeaderValue> = state
            .config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([axum::http::header::CONTENT_TYPE])
            .allow_credentials(true)
    };

    let mut app = Router::new()
        // ====================================================================
        // LANDING PAGE AND HEALTH ROUTES
        // ====================================================================
        .merge(system::system_routes())
        // ====================================================================
        // AUTHENTICATION ROUTES
        // ====================================================================
        .merge(auth::auth_routes())
        // ====================================================================
        // CHAT ROUTES (auth gated)
        // ====================================================================
        .merge(chat::chat_routes())
        .fallback(system::handlers::not_found);

    // Add request/response body logging in debug mode
    if debug {
        app = app.layer(middleware::from_fn(
            logging_middleware::log_request_response,
        ));
    }

    app.layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let config = AppConfig::from_env();

    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY not set. AI features will be limited.");
    }
    if config.google_client_id.is_none() {
        warn!("GOOGLE_CLIENT_ID not set. Token verification will reject all requests.");
    }

    // ========================================================================
    // SERVICE INITIALIZATION
    // ========================================================================

    let http_client = Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()?;

    let google_verifier = Arc::new(GoogleVerifier::new(http_client.clone()));
    info!("GoogleVerifier initialized");

    let gemini_service = Arc::new(GeminiService::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        http_client,
    ));
    info!(
        model = %config.gemini_model,
        configured = gemini_service.is_configured(),
        "GeminiService initialized"
    );

    let sessions = SessionStore::new(config.secret_key.clone(), config.session_ttl_hours);

    // ========================================================================
    // APPLICATION STATE AND SERVER STARTUP
    // ========================================================================

    let port = config.port;
    let state = Arc::new(AppState {
        config,
        google_verifier,
        gemini_service,
        sessions,
    });

    let app = build_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
