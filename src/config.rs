//! App Configuration
//!
//! Read once at startup from the `app-config` JSON block of the host page,
//! falling back to build-time environment values.

use serde::{Deserialize, Serialize};

/// Id of the `<script type="application/json">` element holding overrides
pub const CONFIG_ELEMENT_ID: &str = "app-config";

const DEFAULT_API_URL: &str = "http://localhost:3000";
const DEFAULT_OWNER_ID: u32 = 1;
const DEFAULT_ERROR_TIMEOUT_MS: u32 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Base URL of the todo API, without the `/todos` suffix
    pub api_url: String,
    /// Owner every request is scoped to
    pub owner_id: u32,
    /// How long an error notification stays up
    pub error_timeout_ms: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: option_env!("TODOS_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
            owner_id: option_env!("TODOS_OWNER_ID")
                .and_then(|id| id.parse().ok())
                .unwrap_or(DEFAULT_OWNER_ID),
            error_timeout_ms: DEFAULT_ERROR_TIMEOUT_MS,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load from the host page, or defaults if there is no usable block
    pub fn from_document() -> Self {
        let text = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());

        match text {
            Some(json) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"apiUrl":"https://todos.test","ownerId":42}"#).unwrap();
        assert_eq!(config.api_url, "https://todos.test");
        assert_eq!(config.owner_id, 42);
        assert_eq!(config.error_timeout_ms, 3000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(AppConfig::from_json("{ownerId: 1").is_err());
    }

    #[test]
    fn test_level_filter() {
        let mut config = AppConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);

        config.log_level = "loud".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }
}
