//! Validation for the `[controls]` section.

use crate::keybinds::all_keybinds;
use crate::schema::TinyHudConfig;

use super::helpers::{validate_key, validate_range_f64};

pub(crate) fn validate_controls(errors: &mut Vec<String>, config: &TinyHudConfig) {
    for (name, key) in all_keybinds(&config.controls) {
        validate_key(errors, &format!("controls.{name}"), key);
    }
    validate_range_f64(
        errors,
        "controls.config_button_hold_time",
        config.controls.config_button_hold_time,
        0.0,
        30.0,
    );
}
