//! Loading configuration from disk.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::types::AppConfig;

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ztile"))
}

/// Read and parse a config file.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
    toml::from_str::<AppConfig>(&content).map_err(ConfigError::ParseFailed)
}

/// Load `config.toml` from `dir`, falling back to defaults.
///
/// A missing file is not an error. Read or parse failures and validation
/// warnings are logged.
pub fn load_config_in(dir: &Path) -> AppConfig {
    let config_path = dir.join("config.toml");

    if !config_path.exists() {
        tracing::debug!("Config file not found at {:?}, using defaults", config_path);
        return AppConfig::default();
    }

    let config = match load_config_from(&config_path) {
        Ok(config) => {
            tracing::info!("Loaded app config from {:?}", config_path);
            config
        }
        Err(e) => {
            tracing::warn!("{} ({:?}), using defaults", e, config_path);
            return AppConfig::default();
        }
    };

    for warning in super::validation::validate_config(&config) {
        tracing::warn!("Config validation: {} - {}", warning.field, warning.message);
    }

    config
}

/// Load application config from `~/.config/ztile/config.toml`.
pub fn load_config() -> AppConfig {
    config_dir()
        .map(|dir| load_config_in(&dir))
        .unwrap_or_default()
}
