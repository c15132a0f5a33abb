//! Configuration schema.
//!
//! Hierarchy: `Config` → `EndpointConfig`, `UiConfig`.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.
//! We use `#[serde(rename_all = "camelCase")]` to handle the conversion.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Root Config
// ─────────────────────────────────────────────

/// Root configuration — loaded from `~/.zeitbot/config.json` + env vars.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub endpoint: EndpointConfig,
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────
// Endpoint
// ─────────────────────────────────────────────

/// Where and how to reach the Energy DB question-answering backend.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EndpointConfig {
    /// Base URL of the backend. The `/query` path is appended per request.
    pub base_url: String,
    /// Retrieval depth sent with every question.
    pub top_k: u32,
    /// Per-request timeout in seconds. `0` disables the timeout.
    pub timeout_seconds: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            top_k: 3,
            timeout_seconds: 30,
        }
    }
}

// ─────────────────────────────────────────────
// UI
// ─────────────────────────────────────────────

/// Terminal rendering preferences.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UiConfig {
    /// Also print the SQL behind each answer.
    pub show_sql: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { show_sql: false }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.endpoint.base_url, "http://localhost:8000");
        assert_eq!(config.endpoint.top_k, 3);
        assert_eq!(config.endpoint.timeout_seconds, 30);
        assert!(!config.ui.show_sql);
    }

    #[test]
    fn test_config_from_json_camel_case() {
        let json = serde_json::json!({
            "endpoint": {
                "baseUrl": "https://zeit.example.com",
                "topK": 5,
                "timeoutSeconds": 10
            },
            "ui": {
                "showSql": true
            }
        });

        let config: Config = serde_json::from_value(json).unwrap();
        assert_eq!(config.endpoint.base_url, "https://zeit.example.com");
        assert_eq!(config.endpoint.top_k, 5);
        assert_eq!(config.endpoint.timeout_seconds, 10);
        assert!(config.ui.show_sql);
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = Config::default();
        let json_str = serde_json::to_string_pretty(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&json_str).unwrap();
        assert_eq!(deserialized.endpoint.base_url, config.endpoint.base_url);
        assert_eq!(deserialized.endpoint.top_k, config.endpoint.top_k);
    }

    #[test]
    fn test_config_json_uses_camel_case() {
        let config = Config::default();
        let json = serde_json::to_value(&config).unwrap();
        // Should use camelCase keys
        assert!(json["endpoint"].get("baseUrl").is_some());
        assert!(json["endpoint"].get("timeoutSeconds").is_some());
        assert!(json["ui"].get("showSql").is_some());
        // Should NOT have snake_case keys
        assert!(json["endpoint"].get("base_url").is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = serde_json::json!({
            "endpoint": {
                "baseUrl": "http://10.0.0.5:8000"
            }
        });

        let config: Config = serde_json::from_value(json).unwrap();
        assert_eq!(config.endpoint.base_url, "http://10.0.0.5:8000");
        // Defaults preserved for missing fields
        assert_eq!(config.endpoint.top_k, 3);
        assert_eq!(config.endpoint.timeout_seconds, 30);
        assert!(!config.ui.show_sql);
    }

    #[test]
    fn test_empty_json_gives_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.endpoint.base_url, "http://localhost:8000");
        assert_eq!(config.endpoint.top_k, 3);
    }
}
