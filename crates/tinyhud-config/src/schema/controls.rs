//! Key binding and control scheme settings.

use serde::{Deserialize, Serialize};

/// `[controls]`: canonical key ids for each HUD role.
///
/// Keyboard scancodes are used as-is, mouse buttons start at 256 and
/// gamepad buttons at 266.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub top_action_key: u32,
    pub right_action_key: u32,
    pub bottom_action_key: u32,
    pub left_action_key: u32,
    /// Executes the bottom slot; in combo mode it is the modifier.
    pub toggle_key: u32,
    pub hide_show_key: Option<u32>,
    /// Cycle-then-execute scheme. When false, cycle keys fire the current
    /// slot and the toggle key flips pages.
    pub souls_style: bool,
    /// Bottom execution needs toggle key + bottom action key.
    pub bottom_execute_key_combo_only: bool,
    /// Seconds a key must be held to open the in-game editor (0.0-30.0).
    pub config_button_hold_time: f64,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            top_action_key: 10,
            right_action_key: 11,
            bottom_action_key: 12,
            left_action_key: 13,
            toggle_key: 27,
            hide_show_key: None,
            souls_style: true,
            bottom_execute_key_combo_only: false,
            config_button_hold_time: 5.0,
        }
    }
}
