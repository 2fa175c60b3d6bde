//! Client configuration
//!
//! Loaded from `~/.freeport/config.json` when present, with a
//! `FREEPORT_API_BASE_URL` env override. Missing config is not an error —
//! everything has a default pointing at a local dev server.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Default API base, matching the local Laravel dev server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Load config: file if present, then env override, else defaults.
    pub fn load() -> Result<Self, ApiError> {
        let mut config = match config_path() {
            Ok(path) if path.exists() => {
                let content = fs::read_to_string(&path)
                    .map_err(|e| ApiError::Config(format!("Failed to read config: {}", e)))?;
                serde_json::from_str(&content)
                    .map_err(|e| ApiError::Config(format!("Failed to parse config: {}", e)))?
            }
            _ => Self::default(),
        };

        if let Ok(base) = std::env::var("FREEPORT_API_BASE_URL") {
            if !base.is_empty() {
                config.base_url = base;
            }
        }

        // A trailing slash would double up when joining paths
        while config.base_url.ends_with('/') {
            config.base_url.pop();
        }

        Ok(config)
    }

    /// Origin part of the base URL (base minus the trailing `/api`),
    /// used to resolve storage-relative media paths.
    pub fn api_origin(&self) -> String {
        crate::media::api_origin(&self.base_url)
    }
}

/// Canonical config file path (`~/.freeport/config.json`).
pub fn config_path() -> Result<PathBuf, ApiError> {
    Ok(state_dir()?.join("config.json"))
}

/// Session file path (`~/.freeport/session.json`).
pub fn session_path() -> Result<PathBuf, ApiError> {
    Ok(state_dir()?.join("session.json"))
}

/// Get the state directory (`~/.freeport`), creating it if needed.
pub fn state_dir() -> Result<PathBuf, ApiError> {
    let home = dirs::home_dir().ok_or_else(|| {
        ApiError::Config("Could not find home directory".to_string())
    })?;
    let dir = home.join(".freeport");
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .map_err(|e| ApiError::Config(format!("Failed to create state dir: {}", e)))?;
    }
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: ApiConfig =
            serde_json::from_str(r#"{"base_url": "https://api.freeport.dev/api"}"#).unwrap();
        assert_eq!(config.base_url, "https://api.freeport.dev/api");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_api_origin_strips_api_suffix() {
        let config = ApiConfig {
            base_url: "https://api.freeport.dev/api".to_string(),
            ..Default::default()
        };
        assert_eq!(config.api_origin(), "https://api.freeport.dev");
    }
}
