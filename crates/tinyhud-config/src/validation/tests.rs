//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;
use tinyhud_common::{ActionKind, Position, SlotKind};

fn sword_entry(page: u32, position: Position) -> SlotEntryConfig {
    SlotEntryConfig::new(
        page,
        position,
        SlotKind::Weapon,
        Some(FormConfig::new(0x12EB7, "Iron Sword")),
    )
}

#[test]
fn default_config_validates() {
    let config = TinyHudConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_key_out_of_range() {
    let mut config = TinyHudConfig::default();
    config.controls.left_action_key = 400;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("controls.left_action_key"));
}

#[test]
fn catches_hide_show_out_of_range() {
    let mut config = TinyHudConfig::default();
    config.controls.hide_show_key = Some(MAX_KEY_ID);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("controls.hide_show_key"));
}

#[test]
fn gamepad_keys_are_accepted() {
    let mut config = TinyHudConfig::default();
    config.controls.top_action_key = 266;
    config.controls.right_action_key = 281;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_hold_time_out_of_range() {
    let mut config = TinyHudConfig::default();
    config.controls.config_button_hold_time = 45.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("controls.config_button_hold_time"));
}

#[test]
fn catches_feedback_opacity_too_large() {
    let mut config = TinyHudConfig::default();
    config.hud.slot_button_feedback = 300;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("hud.slot_button_feedback"));
}

#[test]
fn catches_zero_page_count() {
    let mut config = TinyHudConfig::default();
    config.misc.max_page_count = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("misc.max_page_count"));
}

#[test]
fn catches_duplicate_keys() {
    let mut config = TinyHudConfig::default();
    config.controls.bottom_action_key = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("duplicate keybind"));
}

#[test]
fn catches_slot_page_past_max() {
    let mut config = TinyHudConfig::default();
    config.slots.push(sword_entry(2, Position::Right));
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("slots[0].page"));
}

#[test]
fn catches_duplicate_cells() {
    let mut config = TinyHudConfig::default();
    config.slots.push(sword_entry(0, Position::Right));
    config.slots.push(sword_entry(0, Position::Right));
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("slots[1] duplicates page 0 right"));
}

#[test]
fn formless_unequip_entry_is_valid() {
    let mut config = TinyHudConfig::default();
    let mut entry = SlotEntryConfig::new(1, Position::Left, SlotKind::Empty, None);
    entry.action = ActionKind::UnEquip;
    config.slots.push(entry);
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_formless_entry() {
    let mut config = TinyHudConfig::default();
    config
        .slots
        .push(SlotEntryConfig::new(0, Position::Left, SlotKind::Weapon, None));
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("has no form"));
}

#[test]
fn catches_single_hand_shout() {
    let mut config = TinyHudConfig::default();
    let mut entry = SlotEntryConfig::new(
        0,
        Position::Top,
        SlotKind::Shout,
        Some(FormConfig::new(0x13E07, "Unrelenting Force")),
    );
    entry.hand = HandSetting::Single;
    config.slots.push(entry);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("slots[0].hand"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = TinyHudConfig::default();
    config.hud.slot_button_feedback = 999;
    config.misc.max_page_count = 99;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("hud.slot_button_feedback"));
    assert!(err.contains("misc.max_page_count"));
}
