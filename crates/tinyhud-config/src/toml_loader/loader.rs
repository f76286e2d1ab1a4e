//! Core TOML config loading: read from path or platform default.

use crate::schema::TinyHudConfig;
use crate::validation;
use std::path::Path;
use tinyhud_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the parsed config is returned as-is. The slot table
/// builder clamps or drops whatever is still out of range.
pub fn load_from_path(path: &Path) -> Result<TinyHudConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: TinyHudConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; using parsed config as-is");
    }

    info!(
        "loaded config from {} ({} slot entries)",
        path.display(),
        config.slots.len()
    );
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/tinyhud/settings.toml`
/// On Windows: `%APPDATA%\tinyhud\settings.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<TinyHudConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(TinyHudConfig::default())
        }
        Err(e) => Err(e),
    }
}
