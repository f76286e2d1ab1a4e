//! Keybind validation utilities.

use crate::schema::ControlsConfig;
use std::collections::HashMap;
use tinyhud_common::ConfigError;

/// Returns all bound keys as `(name, key)` pairs. Unset keys are omitted.
pub fn all_keybinds(config: &ControlsConfig) -> Vec<(&'static str, u32)> {
    let mut binds = vec![
        ("top_action_key", config.top_action_key),
        ("right_action_key", config.right_action_key),
        ("bottom_action_key", config.bottom_action_key),
        ("left_action_key", config.left_action_key),
        ("toggle_key", config.toggle_key),
    ];
    if let Some(key) = config.hide_show_key {
        binds.push(("hide_show_key", key));
    }
    binds
}

/// Validate that no two roles are mapped to the same key.
pub fn validate_no_duplicates(config: &ControlsConfig) -> Result<(), ConfigError> {
    let binds = all_keybinds(config);
    let mut seen: HashMap<u32, &str> = HashMap::new();

    for (name, key) in &binds {
        if let Some(existing_name) = seen.get(key) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate keybind {key}: assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(*key, name);
    }

    Ok(())
}
