//! Config loader — reads `~/.zeitbot/config.json` and merges env vars.
//!
//! # Loading precedence
//! 1. Defaults (from `Config::default()`)
//! 2. JSON file at `~/.zeitbot/config.json`
//! 3. Environment variables `ZEITBOT_<SECTION>__<FIELD>` (override JSON)

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::schema::Config;

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Load configuration from the default path + env vars.
///
/// Falls back to `Config::default()` if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    load_config_from_path(&config_path)
}

/// Load config from a specific file path.
fn load_config_from_path(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return apply_env_overrides(Config::default());
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return apply_env_overrides(Config::default());
        }
    };

    let config: Config = match serde_json::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to parse config JSON: {}", e);
            return apply_env_overrides(Config::default());
        }
    };

    apply_env_overrides(config)
}

/// Save configuration to disk (pretty-printed JSON with camelCase keys).
pub fn save_config(config: &Config, path: Option<&Path>) -> std::io::Result<()> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    // Ensure parent directory exists
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    std::fs::write(&config_path, json)?;
    debug!("Config saved to {}", config_path.display());
    Ok(())
}

/// Apply environment variable overrides on top of a loaded config.
///
/// Env var format: `ZEITBOT_<SECTION>__<FIELD>` (double underscore as delimiter).
///
/// Supported overrides:
/// - `ZEITBOT_ENDPOINT__BASE_URL` → `endpoint.base_url`
/// - `ZEITBOT_ENDPOINT__TOP_K` → `endpoint.top_k`
/// - `ZEITBOT_ENDPOINT__TIMEOUT_SECONDS` → `endpoint.timeout_seconds`
/// - `ZEITBOT_UI__SHOW_SQL` → `ui.show_sql`
fn apply_env_overrides(mut config: Config) -> Config {
    if let Ok(val) = std::env::var("ZEITBOT_ENDPOINT__BASE_URL") {
        config.endpoint.base_url = val;
    }
    if let Ok(val) = std::env::var("ZEITBOT_ENDPOINT__TOP_K") {
        if let Ok(n) = val.parse::<u32>() {
            config.endpoint.top_k = n;
        }
    }
    if let Ok(val) = std::env::var("ZEITBOT_ENDPOINT__TIMEOUT_SECONDS") {
        if let Ok(n) = val.parse::<u64>() {
            config.endpoint.timeout_seconds = n;
        }
    }
    if let Ok(val) = std::env::var("ZEITBOT_UI__SHOW_SQL") {
        config.ui.show_sql = val == "true" || val == "1";
    }

    config
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
