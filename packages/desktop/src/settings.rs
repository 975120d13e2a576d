use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use forms::config::{ApiConfig, ValidationConfig, DEFAULT_BASE_URL, DEFAULT_DEBOUNCE_MS};
use forms::FrontendConfig;
use serde::Deserialize;

/// Desktop launch settings.
///
/// Read from, in increasing priority: built-in defaults, an optional
/// `frontend.toml` in the working directory, and `USERS_` environment
/// variables (`USERS_API__BASE_URL`, `USERS_VALIDATION__DEBOUNCE_MS`,
/// `USERS_OFFLINE`). A `.env` file is loaded into the environment first.
#[derive(Clone, Debug, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    /// Keep users in memory instead of talking to the backend.
    #[serde(default)]
    pub offline: bool,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = defaults()?
            .add_source(
                File::with_name(FrontendConfig::filename())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("USERS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn frontend(&self) -> FrontendConfig {
        FrontendConfig {
            api: self.api.clone(),
            validation: self.validation.clone(),
        }
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("api.base_url", DEFAULT_BASE_URL)?
        .set_default("validation.debounce_ms", DEFAULT_DEBOUNCE_MS)?
        .set_default("offline", false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::set_var;

    #[test]
    fn test_defaults() {
        let settings: Settings = defaults()
            .and_then(|builder| builder.build())
            .and_then(|config| config.try_deserialize())
            .unwrap();
        assert_eq!(settings.frontend(), FrontendConfig::default());
        assert!(!settings.offline);
    }

    #[test]
    fn test_settings() {
        set_var("USERS_API__BASE_URL", "http://users.test:9000");
        set_var("USERS_VALIDATION__DEBOUNCE_MS", "120");
        set_var("USERS_OFFLINE", "true");
        let settings = Settings::new().unwrap_or_default();
        println!("Settings = {:?}", settings);
        assert_eq!(settings.api.base_url, "http://users.test:9000");
        assert_eq!(settings.validation.debounce_ms, 120);
        assert!(settings.offline);
    }
}
