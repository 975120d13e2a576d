//! # Front-end configuration: `frontend.toml`
//!
//! Settings shared by every shell (web, desktop) that hosts the user forms.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"   # origin of the users backend
//!
//! [validation]
//! debounce_ms = 300                    # quiet period before a field is validated
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`FrontendConfig`] | Top-level config with builder helpers and TOML (de)serialisation. |
//! | [`ApiConfig`] | Where the backend lives. |
//! | [`ValidationConfig`] | Debounce delay for keystroke validation. |
//!
//! Every section has a default, so a missing or empty file is equivalent to
//! the default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Top-level configuration stored in `frontend.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontendConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin the `/user` endpoints hang off. A trailing slash is tolerated.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Validation timing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

/// Failure reading or writing `frontend.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid frontend config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialise frontend config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl FrontendConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            validation: ValidationConfig::default(),
        }
    }

    /// Builder method to set the debounce delay.
    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.validation.debounce_ms = ms;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "frontend.toml"
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.validation.debounce_ms)
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = FrontendConfig::from_toml("").unwrap();
        assert_eq!(config, FrontendConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.debounce(), Duration::from_millis(300));
    }

    #[test]
    fn test_partial_sections() {
        let config = FrontendConfig::from_toml("[validation]\ndebounce_ms = 150\n").unwrap();
        assert_eq!(config.validation.debounce_ms, 150);
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = FrontendConfig::new("https://users.example.org").with_debounce_ms(500);
        let text = config.to_toml().unwrap();
        assert!(text.contains("base_url = \"https://users.example.org\""));
        assert_eq!(FrontendConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml() {
        let err = FrontendConfig::from_toml("[validation]\ndebounce_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
