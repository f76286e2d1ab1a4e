use std::io::Write;

use tinyhud_common::{
    ButtonEvent, CountChange, FormId, Hand, HostCommand, HostEvent, InputDevice, MenuEvent,
    Position, SlotKind,
};
use tinyhud_config::schema::{FormConfig, SlotEntryConfig};
use tinyhud_config::TinyHudConfig;

use super::*;
use crate::host::recording::{HostState, ItemStack, RecordingHost};

const SWORD: u32 = 0x100;
const DAGGER: u32 = 0x101;
const BOW: u32 = 0x200;
const SHIELD: u32 = 0x210;
const POTION: u32 = 0x500;

fn slot(page: u32, position: Position, kind: SlotKind, form: FormConfig) -> SlotEntryConfig {
    SlotEntryConfig::new(page, position, kind, Some(form))
}

fn config() -> TinyHudConfig {
    let mut bow = FormConfig::new(BOW, "Hunting Bow");
    bow.two_handed = true;
    bow.ranged = true;
    let mut config = TinyHudConfig::default();
    config.misc.max_page_count = 3;
    config.slots = vec![
        slot(0, Position::Right, SlotKind::Weapon, FormConfig::new(SWORD, "Iron Sword")),
        slot(2, Position::Right, SlotKind::Weapon, bow),
        slot(0, Position::Left, SlotKind::Shield, FormConfig::new(SHIELD, "Iron Shield")),
        slot(0, Position::Bottom, SlotKind::Consumable, FormConfig::new(POTION, "Potion")),
    ];
    config
}

fn host() -> RecordingHost {
    RecordingHost::new(HostState {
        items: vec![ItemStack {
            form: FormId(POTION),
            count: 4,
        }],
        ..Default::default()
    })
}

fn press(code: u32) -> Vec<ButtonEvent> {
    vec![ButtonEvent::down(InputDevice::Keyboard, code)]
}

#[test]
fn start_executes_left_then_right() {
    let mut engine = HudEngine::new(config());
    let mut host = host();

    let outcomes = engine.start(&mut host);

    assert_eq!(outcomes, vec![SlotOutcome::Issued, SlotOutcome::Issued]);
    assert_eq!(
        host.commands(),
        &[
            HostCommand::EquipArmor {
                form: FormId(SHIELD)
            },
            HostCommand::Equip {
                form: FormId(SWORD),
                hand: Hand::Right
            },
        ]
    );
}

#[test]
fn start_seeds_item_counts() {
    let mut engine = HudEngine::new(config());
    let mut host = host();
    engine.start(&mut host);

    let potion = &engine.table().get_slot(0, Position::Bottom).unwrap()[0];
    assert_eq!(potion.item_count, 4);
}

#[test]
fn right_hand_cycle_scenario() {
    let mut engine = HudEngine::new(config());
    let mut host = host();
    engine.start(&mut host);
    host.drain_commands();

    let results = engine.on_input(&mut host, &press(11));

    assert!(matches!(
        results.as_slice(),
        [InputResult::Cycled { page: 2, .. }]
    ));
    assert_eq!(engine.table().active_page(Position::Right), 2);
    let equips: Vec<_> = host.commands().iter().filter(|c| c.is_equip()).collect();
    assert_eq!(
        equips,
        vec![&HostCommand::Equip {
            form: FormId(BOW),
            hand: Hand::Right
        }]
    );
}

#[test]
fn locked_position_keeps_its_page_across_turns() {
    let mut engine = HudEngine::new(config());
    let mut host = host();
    engine.on_input(&mut host, &press(11));
    assert!(engine.table().is_locked(Position::Left));

    for _ in 0..4 {
        engine.on_input(&mut host, &press(13));
        assert_eq!(engine.table().active_page(Position::Left), 0);
    }
}

#[test]
fn menu_close_resets_edit_flags() {
    let mut engine = HudEngine::new(config());
    engine.bindings_mut().set_is_edit_down(true);

    assert!(!engine.on_menu(&MenuEvent::closing("MapMenu")));
    assert!(engine.bindings().is_edit_down());

    assert!(engine.on_menu(&MenuEvent::closing("InventoryMenu")));
    assert!(!engine.bindings().is_edit_down());
}

#[test]
fn using_a_potion_feeds_the_count_back() {
    let mut engine = HudEngine::new(config());
    let mut host = host();
    engine.start(&mut host);

    engine.on_input(&mut host, &press(27));
    for change in host.drain_count_changes() {
        assert!(engine.on_count_changed(change));
    }

    let potion = &engine.table().get_slot(0, Position::Bottom).unwrap()[0];
    assert_eq!(potion.item_count, 3);
}

#[test]
fn count_change_for_unbound_form_is_not_applied() {
    let mut engine = HudEngine::new(config());
    assert!(!engine.on_count_changed(CountChange {
        form: FormId(0xDEAD),
        delta: 1
    }));
}

#[test]
fn reload_carries_pages_and_reexecutes_hands() {
    let mut engine = HudEngine::new(config());
    let mut host = host();
    engine.on_input(&mut host, &press(11));
    host.drain_commands();

    let mut next = config();
    next.slots[1] = slot(
        2,
        Position::Right,
        SlotKind::Weapon,
        FormConfig::new(DAGGER, "Dagger"),
    );
    let outcomes = engine.reload(&mut host, next);

    assert_eq!(engine.table().active_page(Position::Right), 2);
    assert_eq!(outcomes, vec![SlotOutcome::Issued]);
    assert!(host.commands().contains(&HostCommand::Equip {
        form: FormId(DAGGER),
        hand: Hand::Right
    }));
    assert!(!engine.table().is_locked(Position::Left));
}

#[test]
fn reload_clamps_pages_when_max_shrinks() {
    let mut engine = HudEngine::new(config());
    let mut host = host();
    engine.table_mut().set_active_page_for(2, Position::Top);

    let mut next = config();
    next.misc.max_page_count = 2;
    next.slots.retain(|s| s.page < 2);
    engine.reload(&mut host, next);

    assert_eq!(engine.table().max_page_count(), 2);
    assert_eq!(engine.table().active_page(Position::Top), 0);
}

#[test]
fn reload_applies_new_bindings() {
    let mut engine = HudEngine::new(config());
    let mut host = host();
    let mut next = config();
    next.controls.right_action_key = 30;

    engine.reload(&mut host, next);
    host.drain_commands();

    assert_eq!(
        engine.on_input(&mut host, &press(11)),
        vec![InputResult::Ignored]
    );
    assert!(matches!(
        engine.on_input(&mut host, &press(30)).as_slice(),
        [InputResult::Cycled { .. }]
    ));
}

#[test]
fn reload_event_reads_the_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[misc]
max_page_count = 4

[[slots]]
page = 3
position = "right"
kind = "weapon"
form = {{ id = 256, name = "Iron Sword" }}
"#
    )
    .unwrap();

    let mut engine = HudEngine::new(config()).with_config_path(file.path());
    let mut host = host();

    let outcome = engine.handle_event(&mut host, &HostEvent::Reload).unwrap();

    assert!(matches!(outcome, EventOutcome::Reloaded { .. }));
    assert_eq!(engine.table().max_page_count(), 4);
    assert_eq!(engine.table().highest_used_page(Position::Right), Some(3));
}

#[test]
fn oversized_page_count_from_file_is_clamped() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[misc]\nmax_page_count = 100000000\n").unwrap();

    let loaded = load_from_path(file.path()).unwrap();
    assert_eq!(loaded.misc.max_page_count, 100_000_000);

    let engine = HudEngine::new(loaded);
    assert_eq!(
        engine.table().max_page_count(),
        tinyhud_config::validation::MAX_PAGE_COUNT
    );
    assert!(engine.table().get_slot(24, Position::Right).is_some());
    assert!(engine.table().get_slot(25, Position::Right).is_none());
}

#[test]
fn reload_event_with_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = HudEngine::new(config()).with_config_path(dir.path().join("gone.toml"));
    let mut host = host();

    let err = engine
        .handle_event(&mut host, &HostEvent::Reload)
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
    assert_eq!(engine.table().max_page_count(), 3);
}

#[test]
fn handle_event_routes_every_kind() {
    let mut engine = HudEngine::new(config());
    let mut host = host();

    let input = engine
        .handle_event(&mut host, &HostEvent::Input(press(11)))
        .unwrap();
    assert!(matches!(input, EventOutcome::Input { ref results } if results.len() == 1));

    let menu = engine
        .handle_event(&mut host, &HostEvent::Menu(MenuEvent::closing("MagicMenu")))
        .unwrap();
    assert_eq!(
        menu,
        EventOutcome::Menu {
            cleared_edit_flags: false
        }
    );

    let count = engine
        .handle_event(
            &mut host,
            &HostEvent::InventoryCount(CountChange {
                form: FormId(POTION),
                delta: -1,
            }),
        )
        .unwrap();
    assert_eq!(count, EventOutcome::Count { applied: true });

    let reload = engine.handle_event(&mut host, &HostEvent::Reload).unwrap();
    assert!(matches!(reload, EventOutcome::Reloaded { .. }));
}

#[test]
fn clear_highlights_after_cycle() {
    let mut engine = HudEngine::new(config());
    let mut host = host();
    engine.on_input(&mut host, &press(11));
    assert!(engine.table().active_slots(Position::Right).unwrap()[0]
        .feedback
        .highlight);

    engine.clear_highlights();
    assert!(!engine.table().active_slots(Position::Right).unwrap()[0]
        .feedback
        .highlight);
}
