//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# TinyHUD settings
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
#
# Key ids: keyboard scancodes 0-255, mouse buttons 256-265,
# gamepad buttons 266-281 (DPad Up = 266 ... A = 276, Right Trigger = 281).

[controls]
# top_action_key = 10
# right_action_key = 11
# bottom_action_key = 12
# left_action_key = 13
# toggle_key = 27
# hide_show_key = 48
# souls_style = true
# bottom_execute_key_combo_only = false
# config_button_hold_time = 5.0   # 0.0-30.0 seconds

[hud]
# slot_button_feedback = 200      # 0-255
# hide_outside_combat = false

[misc]
# max_page_count = 2              # 1-25
# action_check = false
# empty_hand_setting = true
# disable_input_quick_loot = false

[logging]
# level = "info"                  # trace, debug, info, warn, error

# One entry per (page, position). Positions: top, right, bottom, left.
# kind: empty, weapon, shield, magic, power, shout, consumable, scroll, armor
# action: default, instant, un_equip
# hand: both (one assignment) or single (right, then left_*)
#
# [[slots]]
# page = 0
# position = "right"
# kind = "weapon"
# hand = "single"
# form = { id = 0x00012EB7, name = "Iron Sword" }
# left_kind = "shield"
# left_form = { id = 0x00012EB6, name = "Iron Shield" }
#
# [[slots]]
# page = 0
# position = "top"
# kind = "power"
# action = "instant"
# form = { id = 0x0001A312, name = "Battle Cry" }
"##
    .to_string()
}
