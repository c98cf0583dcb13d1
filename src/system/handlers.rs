//! Landing page, health check, and fallback handlers

use axum::{extract::Extension, response::Html, Json};
use std::sync::Arc;

use crate::common::{ApiError, AppState};

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Jette's AI App</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 640px;
            margin: 50px auto;
            padding: 20px;
            background: #f5f5f5;
        }
        .card {
            background: white;
            padding: 30px;
            border-radius: 12px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        h1 { margin-top: 0; color: #333; }
        textarea { width: 100%; min-height: 80px; margin: 10px 0; }
        button {
            background: #667eea;
            color: white;
            border: none;
            padding: 12px 24px;
            border-radius: 6px;
            cursor: pointer;
        }
        button:hover { background: #5568d3; }
        #reply { white-space: pre-wrap; margin-top: 20px; color: #444; }
    </style>
</head>
<body>
    <div class="card">
        <h1>Jette's AI App</h1>
        <p>A Gemini-powered AI assistant. Sign in with Google, then ask away.</p>
        <textarea id="message" placeholder="Ask me anything..."></textarea>
        <button onclick="send()">Send</button>
        <div id="reply"></div>
    </div>
    <script>
        async function send() {
            const message = document.getElementById('message').value;
            const reply = document.getElementById('reply');
            reply.textContent = '...';
            const res = await fetch('/api/chat', {
                method: 'POST',
                headers: {'Content-Type': 'application/json'},
                body: JSON.stringify({message})
            });
            const data = await res.json();
            reply.textContent = data.response || data.error;
        }
    </script>
</body>
</html>
"#;

/// GET /
/// Serves the static landing page
pub async fn index() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// GET /health
/// Health check endpoint for the hosting platform's probes
///
/// Always returns 200 from static data; never touches the collaborators.
pub async fn health(Extension(state): Extension<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "jettes-ai-app",
        "gemini_configured": state.gemini_service.is_configured(),
    }))
}

/// Fallback for unmatched paths
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Resource not found".to_string())
}
