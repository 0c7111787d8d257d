//! Board Configuration
//!
//! Where the remote service lives and which user's board is shown.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5007";
pub const DEFAULT_USER_ID: u32 = 1;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Failed to parse board config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Scheme and authority of the service; `/api/v1` is appended per request
    pub api_base_url: String,
    /// Owner of the board and of newly created columns
    pub user_id: u32,
    /// Ignored on wasm32, where the browser owns request timeouts
    pub request_timeout_secs: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_id: DEFAULT_USER_ID,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl BoardConfig {
    /// Defaults overlaid with `KANBAN_API_URL`, `KANBAN_USER_ID` and `KANBAN_REQUEST_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("KANBAN_API_URL").filter(|v| !v.trim().is_empty()) {
            config.api_base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup("KANBAN_USER_ID") {
            config.user_id = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "KANBAN_USER_ID",
                value: raw.clone(),
            })?;
        }
        if let Some(raw) = lookup("KANBAN_REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "KANBAN_REQUEST_TIMEOUT_SECS",
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = BoardConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:5007");
        assert_eq!(config.user_id, 1);
    }

    #[test]
    fn test_env_overrides() {
        let config = BoardConfig::from_lookup(lookup_from(&[
            ("KANBAN_API_URL", "https://board.example.com"),
            ("KANBAN_USER_ID", " 42 "),
            ("KANBAN_REQUEST_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url, "https://board.example.com");
        assert_eq!(config.user_id, 42);
        assert_eq!(config.request_timeout_secs, 3);
    }

    #[test]
    fn test_invalid_user_id_is_rejected() {
        let err = BoardConfig::from_lookup(lookup_from(&[("KANBAN_USER_ID", "abc")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "KANBAN_USER_ID", .. }));
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = BoardConfig::from_json(r#"{"user_id": 7}"#).unwrap();
        assert_eq!(config.user_id, 7);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }
}
