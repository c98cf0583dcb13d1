// src/common/config.rs
//! Process configuration, read once at startup from the environment.

use std::env;

/// Application configuration
///
/// Constructed once in `main` and carried in `AppState`; immutable afterwards.
/// A missing Gemini API key is not an error - the AI collaborator degrades to
/// an unconfigured state reported by the health endpoint.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub google_client_id: Option<String>,
    pub secret_key: String,
    pub require_auth: bool,
    pub port: u16,
    pub debug: bool,
    pub cors_origins: Vec<String>,
    pub http_timeout_secs: u64,
    pub session_ttl_hours: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let gemini_api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-pro".to_string());
        let google_client_id = env::var("GOOGLE_CLIENT_ID").ok().filter(|c| !c.is_empty());

        let secret_key = env::var("SECRET_KEY")
            .unwrap_or_else(|_| "dev-secret-key-change-in-production".to_string());

        let require_auth = env::var("REQUIRE_AUTH")
            .unwrap_or_else(|_| "false".to_string())
            .to_lowercase()
            == "true";

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        let debug = env::var("APP_ENV")
            .map(|v| v == "development")
            .unwrap_or(false);

        let cors_origins: Vec<String> = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| {
                "http://localhost:3000,http://localhost:5173,http://localhost:8080".to_string()
            })
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let http_timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse::<u64>().ok())
            .unwrap_or(30);

        let session_ttl_hours = env::var("SESSION_TTL_HOURS")
            .ok()
            .and_then(|t| t.parse::<i64>().ok())
            .unwrap_or(24);

        Self {
            gemini_api_key,
            gemini_model,
            google_client_id,
            secret_key,
            require_auth,
            port,
            debug,
            cors_origins,
            http_timeout_secs,
            session_ttl_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG_VARS: &[&str] = &[
        "GEMINI_API_KEY",
        "GEMINI_MODEL",
        "GOOGLE_CLIENT_ID",
        "SECRET_KEY",
        "REQUIRE_AUTH",
        "PORT",
        "APP_ENV",
        "CORS_ORIGINS",
        "HTTP_TIMEOUT_SECS",
        "SESSION_TTL_HOURS",
    ];

    #[test]
    fn test_config_defaults() {
        // Save original env vars, then unset for the test
        let saved: Vec<(&str, Option<String>)> = CONFIG_VARS
            .iter()
            .map(|var| (*var, env::var(var).ok()))
            .collect();
        for var in CONFIG_VARS {
            env::remove_var(var);
        }

        let config = AppConfig::from_env();

        assert!(config.gemini_api_key.is_none());
        assert_eq!(config.gemini_model, "gemini-pro");
        assert!(config.google_client_id.is_none());
        assert!(!config.require_auth, "auth should be opt-in by default");
        assert_eq!(config.port, 8080);
        assert!(!config.debug);
        assert_eq!(config.http_timeout_secs, 30);
        assert_eq!(config.session_ttl_hours, 24);
        assert!(!config.cors_origins.is_empty());

        // Restore
        for (var, value) in saved {
            if let Some(value) = value {
                env::set_var(var, value);
            }
        }
    }
}
