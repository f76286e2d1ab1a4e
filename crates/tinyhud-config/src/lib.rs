//! HUD configuration system.
//!
//! Provides TOML-based settings with live reload and full validation.
//! All config sections use defaults so partial files work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tinyhud_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod keybinds;
pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use reload::ReloadManager;
pub use schema::{TinyHudConfig, CONFIG_SCHEMA_VERSION};
pub use watcher::ConfigWatcher;

use tinyhud_common::ConfigError;

/// Load config from the platform default path.
///
/// Creates a documented default file if none exists. Validation problems
/// are logged by the loader, not returned.
pub fn load_config() -> Result<TinyHudConfig, ConfigError> {
    toml_loader::load_default()
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &TinyHudConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
