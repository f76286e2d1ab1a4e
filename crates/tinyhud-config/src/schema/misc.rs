use serde::{Deserialize, Serialize};

/// `[misc]`: layout and gating options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiscConfig {
    /// Pages per position (valid range: 1-25).
    pub max_page_count: u32,
    /// Force both hands to the default action when their actions differ.
    pub action_check: bool,
    /// Let un-equip slots empty the hand; when false they do nothing.
    pub empty_hand_setting: bool,
    /// Ignore input while the quick-loot menu is open.
    pub disable_input_quick_loot: bool,
}

impl Default for MiscConfig {
    fn default() -> Self {
        Self {
            max_page_count: 2,
            action_check: false,
            empty_hand_setting: true,
            disable_input_quick_loot: false,
        }
    }
}
