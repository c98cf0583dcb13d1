//! Tests for system module
//!
//! These tests verify the health contract, the landing page, and the JSON 404
//! fallback.

#[cfg(test)]
mod tests {
    use crate::auth::session::SessionStore;
    use crate::common::{AppConfig, AppState};
    use crate::services::{GeminiService, GoogleVerifier};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_config() -> AppConfig {
        AppConfig {
            gemini_api_key: None,
            gemini_model: "gemini-pro".to_string(),
            google_client_id: None,
            secret_key: "test-secret".to_string(),
            require_auth: false,
            port: 0,
            debug: false,
            cors_origins: vec!["http://localhost:3000".to_string()],
            http_timeout_secs: 5,
            session_ttl_hours: 24,
        }
    }

    fn test_app(config: AppConfig) -> Router {
        let client = reqwest::Client::new();
        let state = Arc::new(AppState {
            google_verifier: Arc::new(GoogleVerifier::new(client.clone())),
            gemini_service: Arc::new(GeminiService::new(
                config.gemini_api_key.clone(),
                config.gemini_model.clone(),
                client,
            )),
            sessions: SessionStore::new(config.secret_key.clone(), config.session_ttl_hours),
            config,
        });
        crate::build_app(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_unconfigured_service() {
        let app = test_app(test_config());

        let response = app.oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "jettes-ai-app");
        assert_eq!(json["gemini_configured"], false);
    }

    #[tokio::test]
    async fn test_health_reports_configured_service() {
        let app = test_app(AppConfig {
            gemini_api_key: Some("key-123".to_string()),
            ..test_config()
        });

        let response = app.oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["gemini_configured"], true);
    }

    #[tokio::test]
    async fn test_health_is_not_auth_gated() {
        let app = test_app(AppConfig {
            require_auth: true,
            ..test_config()
        });

        let response = app.oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn test_index_serves_landing_page() {
        let app = test_app(test_config());

        let response = app.oneshot(get("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("Jette's AI App"));
    }

    #[tokio::test]
    async fn test_unmatched_path_returns_json_404() {
        let app = test_app(test_config());

        let response = app.oneshot(get("/nonexistent-route")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Resource not found");
    }

    #[tokio::test]
    async fn test_unmatched_api_post_returns_json_404() {
        let app = test_app(test_config());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Resource not found");
    }
}
