//! Full configuration validation.
//!
//! Validates key ranges, keybind uniqueness, numeric ranges and the slot
//! layout. Each domain has its own submodule; this orchestrator calls them
//! all and collects errors into a single `ConfigError`.

mod controls;
mod helpers;
mod misc;
mod slots;

#[cfg(test)]
mod tests;

pub use helpers::MAX_KEY_ID;
pub use misc::MAX_PAGE_COUNT;

use crate::keybinds;
use crate::schema::TinyHudConfig;
use tinyhud_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TinyHudConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.controls) {
        errors.push(e.to_string());
    }

    controls::validate_controls(&mut errors, config);
    misc::validate_hud(&mut errors, config);
    misc::validate_misc(&mut errors, config);
    slots::validate_slots(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
