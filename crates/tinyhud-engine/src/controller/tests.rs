use tinyhud_common::{ActionKind, ButtonEvent, FormId, Hand, HostCommand, InputDevice, Position, SlotKind};
use tinyhud_config::schema::{FormConfig, SlotEntryConfig};
use tinyhud_config::TinyHudConfig;
use tinyhud_platform::KeyBindings;
use tinyhud_slots::SlotTable;

use super::*;
use crate::dispatch::{Dispatcher, ExecuteMode, SlotOutcome};
use crate::host::recording::{HostState, ItemStack, KnownSpell, RecordingHost};
use crate::host::InventoryAmmo;

const TOP: u32 = 10;
const RIGHT: u32 = 11;
const BOTTOM: u32 = 12;
const LEFT: u32 = 13;
const TOGGLE: u32 = 27;
const SHOUT: u32 = 44;

const SWORD: u32 = 0x100;
const BOW: u32 = 0x200;
const SHIELD: u32 = 0x210;
const BATTLE_CRY: u32 = 0x400;
const FUS: u32 = 0x410;
const POTION: u32 = 0x500;
const IRON_ARROW: FormId = FormId(0x700);
const ELVEN_ARROW: FormId = FormId(0x701);

struct Fixture {
    host: RecordingHost,
    bindings: KeyBindings,
    table: SlotTable,
    dispatcher: Dispatcher,
    controller: CyclingController,
}

impl Fixture {
    fn new(config: TinyHudConfig, state: HostState) -> Self {
        Self {
            host: RecordingHost::new(state),
            bindings: KeyBindings::from_config(&config.controls),
            table: SlotTable::from_config(&config),
            dispatcher: Dispatcher::new(&config.misc),
            controller: CyclingController::new(ControllerSettings::from_config(&config)),
        }
    }

    fn turn(&mut self, events: &[ButtonEvent]) -> Vec<InputResult> {
        self.controller.handle_input_turn(
            &mut self.host,
            &mut self.bindings,
            &mut self.table,
            &self.dispatcher,
            events,
        )
    }

    fn press(&mut self, code: u32) -> InputResult {
        self.turn(&[ButtonEvent::down(InputDevice::Keyboard, code)])
            .remove(0)
    }

    fn release(&mut self, code: u32) -> InputResult {
        self.turn(&[ButtonEvent::up(InputDevice::Keyboard, code, 0.2)])
            .remove(0)
    }
}

fn slot(page: u32, position: Position, kind: SlotKind, form: FormConfig) -> SlotEntryConfig {
    SlotEntryConfig::new(page, position, kind, Some(form))
}

fn bow() -> FormConfig {
    let mut bow = FormConfig::new(BOW, "Hunting Bow");
    bow.two_handed = true;
    bow.ranged = true;
    bow
}

fn config(slots: Vec<SlotEntryConfig>) -> TinyHudConfig {
    let mut config = TinyHudConfig::default();
    config.misc.max_page_count = 3;
    config.slots = slots;
    config
}

/// Right hand: sword on page 0, nothing on page 1, bow on page 2.
fn right_hand_config() -> TinyHudConfig {
    config(vec![
        slot(0, Position::Right, SlotKind::Weapon, FormConfig::new(SWORD, "Iron Sword")),
        slot(2, Position::Right, SlotKind::Weapon, bow()),
    ])
}

fn archer() -> HostState {
    HostState {
        ammo: vec![
            InventoryAmmo {
                form: IRON_ARROW,
                name: "Iron Arrow".into(),
                count: 20,
            },
            InventoryAmmo {
                form: ELVEN_ARROW,
                name: "Elven Arrow".into(),
                count: 5,
            },
        ],
        ..Default::default()
    }
}

#[test]
fn right_cycle_skips_empty_page_and_equips_once() {
    let mut f = Fixture::new(right_hand_config(), HostState::default());

    let result = f.press(RIGHT);

    assert_eq!(
        result,
        InputResult::Cycled {
            position: Position::Right,
            page: 2,
            outcomes: vec![SlotOutcome::Issued],
        }
    );
    assert_eq!(f.table.active_page(Position::Right), 2);
    assert_eq!(
        f.host.commands(),
        &[HostCommand::Equip {
            form: FormId(BOW),
            hand: Hand::Right
        }]
    );
}

#[test]
fn cycled_slot_is_highlighted_and_dimmed() {
    let mut f = Fixture::new(right_hand_config(), HostState::default());
    f.press(RIGHT);

    let slot = &f.table.active_slots(Position::Right).unwrap()[0];
    assert!(slot.feedback.highlight);
    assert_eq!(slot.feedback.opacity, 200);

    assert_eq!(
        f.release(RIGHT),
        InputResult::Feedback {
            position: Position::Right
        }
    );
    let slot = &f.table.active_slots(Position::Right).unwrap()[0];
    assert_eq!(slot.feedback.opacity, tinyhud_slots::FULL_OPACITY);
}

#[test]
fn unconfigured_keys_drop_the_whole_turn() {
    let mut f = Fixture::new(right_hand_config(), HostState::default());
    f.bindings.set_right_action(tinyhud_platform::KeyId::NONE);

    let results = f.turn(&[
        ButtonEvent::down(InputDevice::Keyboard, TOP),
        ButtonEvent::down(InputDevice::Keyboard, LEFT),
    ]);

    assert_eq!(
        results,
        vec![
            InputResult::Dropped {
                reason: DropReason::KeysNotConfigured
            };
            2
        ]
    );
    assert!(f.host.commands().is_empty());
}

#[test]
fn blocking_menu_drops_input() {
    let mut f = Fixture::new(right_hand_config(), HostState::default());
    f.host.state.menus.blocking_menu_open = true;

    assert_eq!(
        f.press(RIGHT),
        InputResult::Dropped {
            reason: DropReason::BlockingMenu
        }
    );
    assert_eq!(f.table.active_page(Position::Right), 0);
}

#[test]
fn per_event_gates() {
    let mut f = Fixture::new(right_hand_config(), HostState::default());

    f.host.state.menus.game_paused = true;
    assert_eq!(
        f.press(RIGHT),
        InputResult::Dropped {
            reason: DropReason::GamePaused
        }
    );

    f.host.state.menus.game_paused = false;
    f.host.state.menus.movement_enabled = false;
    assert_eq!(
        f.press(RIGHT),
        InputResult::Dropped {
            reason: DropReason::MovementDisabled
        }
    );

    f.host.state.menus.movement_enabled = true;
    f.host.state.menus.hud_shown = false;
    assert_eq!(
        f.press(RIGHT),
        InputResult::Dropped {
            reason: DropReason::HudHidden
        }
    );
    assert!(f.host.commands().is_empty());
}

#[test]
fn quick_loot_only_blocks_when_configured() {
    let mut cfg = right_hand_config();
    cfg.misc.disable_input_quick_loot = true;
    let mut f = Fixture::new(cfg, HostState::default());
    f.host.state.menus.quick_loot_open = true;
    assert_eq!(
        f.press(RIGHT),
        InputResult::Dropped {
            reason: DropReason::QuickLoot
        }
    );

    let mut f = Fixture::new(right_hand_config(), HostState::default());
    f.host.state.menus.quick_loot_open = true;
    assert!(matches!(f.press(RIGHT), InputResult::Cycled { .. }));
}

#[test]
fn unknown_gamepad_button_is_invalid() {
    let mut f = Fixture::new(right_hand_config(), HostState::default());
    let results = f.turn(&[ButtonEvent::down(InputDevice::Gamepad, 0x0400)]);
    assert_eq!(
        results,
        vec![InputResult::Dropped {
            reason: DropReason::InvalidKey
        }]
    );
}

#[test]
fn unbound_key_is_ignored() {
    let mut f = Fixture::new(right_hand_config(), HostState::default());
    assert_eq!(f.press(0x1C), InputResult::Ignored);
    assert!(f.host.commands().is_empty());
}

#[test]
fn power_key_casts_instant_power_without_cycling() {
    let mut power = slot(
        0,
        Position::Top,
        SlotKind::Power,
        FormConfig::new(BATTLE_CRY, "Battle Cry"),
    );
    power.action = ActionKind::Instant;
    let mut cfg = config(vec![
        power,
        slot(1, Position::Top, SlotKind::Shout, FormConfig::new(FUS, "Unrelenting Force")),
    ]);
    cfg.controls.souls_style = true;
    let state = HostState {
        shout_key: Some(SHOUT),
        spells: vec![KnownSpell {
            form: FormId(BATTLE_CRY),
            cost: 0.0,
        }],
        ..Default::default()
    };
    let mut f = Fixture::new(cfg, state);

    let result = f.press(SHOUT);

    assert_eq!(
        result,
        InputResult::Executed {
            position: Position::Top,
            mode: ExecuteMode::InstantOnly,
            outcomes: vec![SlotOutcome::Issued],
        }
    );
    assert_eq!(
        f.host.commands(),
        &[HostCommand::CastInstant {
            form: FormId(BATTLE_CRY),
            hand: None
        }]
    );
    assert_eq!(f.table.active_page(Position::Top), 0);
}

#[test]
fn shout_key_from_other_device_is_not_the_power_key() {
    let mut f = Fixture::new(
        right_hand_config(),
        HostState {
            shout_key: Some(SHOUT),
            ..Default::default()
        },
    );
    let results = f.turn(&[ButtonEvent::down(InputDevice::Mouse, 1)]);
    assert_eq!(results, vec![InputResult::Ignored]);
    assert_eq!(f.bindings.top_execute(), tinyhud_platform::KeyId::NONE);
}

#[test]
fn top_cycle_equips_but_never_casts() {
    let mut power = slot(
        1,
        Position::Top,
        SlotKind::Power,
        FormConfig::new(BATTLE_CRY, "Battle Cry"),
    );
    power.action = ActionKind::Instant;
    let cfg = config(vec![
        slot(0, Position::Top, SlotKind::Shout, FormConfig::new(FUS, "Unrelenting Force")),
        power,
        slot(2, Position::Top, SlotKind::Shout, FormConfig::new(FUS + 1, "Whirlwind Sprint")),
    ]);
    let mut f = Fixture::new(cfg, HostState::default());

    assert_eq!(
        f.press(TOP),
        InputResult::Cycled {
            position: Position::Top,
            page: 1,
            outcomes: vec![SlotOutcome::Skipped],
        }
    );
    assert!(f.host.commands().is_empty());

    f.press(TOP);
    assert_eq!(
        f.host.commands(),
        &[HostCommand::EquipShout {
            form: FormId(FUS + 1)
        }]
    );
}

#[test]
fn bottom_cycle_does_not_execute() {
    let cfg = config(vec![
        slot(0, Position::Bottom, SlotKind::Consumable, FormConfig::new(POTION, "Potion")),
        slot(1, Position::Bottom, SlotKind::Consumable, FormConfig::new(POTION + 1, "Stamina")),
    ]);
    let mut f = Fixture::new(cfg, HostState::default());

    assert_eq!(
        f.press(BOTTOM),
        InputResult::Cycled {
            position: Position::Bottom,
            page: 1,
            outcomes: Vec::new(),
        }
    );
    assert!(f.host.commands().is_empty());
}

fn potion_config(combo: bool) -> TinyHudConfig {
    let mut cfg = config(vec![
        slot(0, Position::Bottom, SlotKind::Consumable, FormConfig::new(POTION, "Potion")),
        slot(1, Position::Bottom, SlotKind::Consumable, FormConfig::new(POTION + 1, "Stamina")),
    ]);
    cfg.controls.bottom_execute_key_combo_only = combo;
    cfg
}

fn potion_state() -> HostState {
    HostState {
        items: vec![
            ItemStack {
                form: FormId(POTION),
                count: 3,
            },
            ItemStack {
                form: FormId(POTION + 1),
                count: 3,
            },
        ],
        ..Default::default()
    }
}

#[test]
fn toggle_key_executes_bottom() {
    let mut f = Fixture::new(potion_config(false), potion_state());

    assert_eq!(
        f.press(TOGGLE),
        InputResult::Executed {
            position: Position::Bottom,
            mode: ExecuteMode::All,
            outcomes: vec![SlotOutcome::Issued],
        }
    );
    assert_eq!(
        f.host.commands(),
        &[HostCommand::UseItem {
            form: FormId(POTION)
        }]
    );
}

#[test]
fn combo_executes_utility_instead_of_cycling() {
    let mut f = Fixture::new(potion_config(true), potion_state());

    assert_eq!(f.press(TOGGLE), InputResult::Ignored);
    assert!(f.controller.toggle_mode_entered());
    assert!(f.host.commands().is_empty());

    let result = f.press(BOTTOM);
    assert_eq!(
        result,
        InputResult::Executed {
            position: Position::Bottom,
            mode: ExecuteMode::All,
            outcomes: vec![SlotOutcome::Issued],
        }
    );
    assert_eq!(f.table.active_page(Position::Bottom), 0);

    f.release(TOGGLE);
    assert!(!f.controller.toggle_mode_entered());

    assert!(matches!(
        f.press(BOTTOM),
        InputResult::Cycled { page: 1, .. }
    ));
    assert_eq!(f.host.commands().len(), 1);
}

#[test]
fn locked_left_cycles_ammo_not_pages() {
    let mut cfg = right_hand_config();
    cfg.slots.push(slot(
        1,
        Position::Left,
        SlotKind::Shield,
        FormConfig::new(SHIELD, "Iron Shield"),
    ));
    let mut f = Fixture::new(cfg, archer());
    f.press(RIGHT);
    assert!(f.table.is_locked(Position::Left));
    assert_eq!(f.host.state.equipped_ammo, Some(IRON_ARROW));
    f.host.drain_commands();

    let result = f.press(LEFT);

    assert_eq!(
        result,
        InputResult::AmmoCycled {
            equipped: Some(ELVEN_ARROW)
        }
    );
    assert_eq!(f.table.active_page(Position::Left), 0);
    assert!(f.table.ammo().current().unwrap().feedback.highlight);
    assert_eq!(
        f.host.commands(),
        &[HostCommand::EquipAmmo { form: ELVEN_ARROW }]
    );

    f.press(LEFT);
    assert_eq!(f.host.state.equipped_ammo, Some(IRON_ARROW));
    assert_eq!(f.table.active_page(Position::Left), 0);
}

#[test]
fn locked_left_dims_ammo_on_key_down() {
    let mut f = Fixture::new(right_hand_config(), archer());
    f.press(RIGHT);
    f.release(RIGHT);

    f.press(LEFT);
    assert_eq!(f.table.ammo().current().unwrap().feedback.opacity, 200);
    f.release(LEFT);
    assert_eq!(
        f.table.ammo().current().unwrap().feedback.opacity,
        tinyhud_slots::FULL_OPACITY
    );
}

#[test]
fn show_hide_key_toggles_hud() {
    let mut cfg = right_hand_config();
    cfg.controls.hide_show_key = Some(35);
    let mut f = Fixture::new(cfg, HostState::default());

    assert_eq!(f.press(35), InputResult::ToggledHud);
    assert!(!f.host.state.hud_visible);
    assert_eq!(f.host.commands(), &[HostCommand::ToggleHud]);
}

#[test]
fn release_of_show_hide_does_nothing() {
    let mut cfg = right_hand_config();
    cfg.controls.hide_show_key = Some(35);
    let mut f = Fixture::new(cfg, HostState::default());
    assert_eq!(f.release(35), InputResult::Ignored);
    assert!(f.host.state.hud_visible);
}

#[test]
fn hidden_hud_fades_in_on_use() {
    let mut cfg = right_hand_config();
    cfg.hud.hide_outside_combat = true;
    let mut f = Fixture::new(
        cfg,
        HostState {
            hud_faded_in: false,
            ..Default::default()
        },
    );

    f.press(RIGHT);

    assert_eq!(f.host.commands()[0], HostCommand::FadeIn);
    assert!(f.host.state.hud_faded_in);
}

#[test]
fn legacy_mode_fires_current_slot() {
    let mut cfg = right_hand_config();
    cfg.controls.souls_style = false;
    let mut f = Fixture::new(cfg, HostState::default());

    assert_eq!(
        f.press(RIGHT),
        InputResult::Executed {
            position: Position::Right,
            mode: ExecuteMode::All,
            outcomes: vec![SlotOutcome::Issued],
        }
    );
    assert_eq!(f.table.active_page(Position::Right), 0);
    assert_eq!(
        f.host.commands(),
        &[HostCommand::Equip {
            form: FormId(SWORD),
            hand: Hand::Right
        }]
    );
}

#[test]
fn legacy_toggle_flips_every_page() {
    let mut cfg = right_hand_config();
    cfg.controls.souls_style = false;
    let mut f = Fixture::new(cfg, HostState::default());

    assert_eq!(f.press(TOGGLE), InputResult::PageFlipped { page: 1 });
    for pos in Position::ALL {
        assert_eq!(f.table.active_page(pos), 1);
    }
    f.press(TOGGLE);
    assert_eq!(f.press(TOGGLE), InputResult::PageFlipped { page: 0 });
}

#[test]
fn input_result_serializes_tagged() {
    let json = serde_json::to_value(InputResult::PageFlipped { page: 2 }).unwrap();
    assert_eq!(json["result"], "page_flipped");
    assert_eq!(json["page"], 2);
}
