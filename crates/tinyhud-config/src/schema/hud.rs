use serde::{Deserialize, Serialize};

/// `[hud]`: overlay feedback settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Slot opacity while its key is held (0-255).
    pub slot_button_feedback: u32,
    /// Fade the overlay out of combat and back in on use.
    pub hide_outside_combat: bool,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            slot_button_feedback: 200,
            hide_outside_combat: false,
        }
    }
}
