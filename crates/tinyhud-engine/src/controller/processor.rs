use tinyhud_common::{ButtonEvent, Position};
use tinyhud_platform::{resolve, KeyBindings, KeyId};
use tinyhud_slots::SlotTable;
use tracing::{debug, trace, warn};

use super::types::{ControllerSettings, DropReason, InputResult};
use crate::dispatch::{Dispatcher, ExecuteMode};
use crate::host::{Host, SHOUT_ACTION};

/// Role flags for one resolved key.
#[derive(Debug, Clone, Copy)]
struct KeyRoles {
    position: Option<Position>,
    show_hide: bool,
    power: bool,
    utility: bool,
    toggle: bool,
}

impl KeyRoles {
    fn classify(bindings: &KeyBindings, key: KeyId) -> Self {
        Self {
            position: bindings.cycle_position(key),
            show_hide: bindings.hide_show().matches(key),
            power: bindings.top_execute().matches(key),
            utility: bindings.bottom_action().matches(key),
            toggle: bindings.bottom_execute_or_toggle().matches(key),
        }
    }
}

/// Holds the only state that survives between input turns: whether the
/// toggle key is being held as an execute modifier.
#[derive(Debug, Clone, Default)]
pub struct CyclingController {
    settings: ControllerSettings,
    toggle_mode_entered: bool,
}

impl CyclingController {
    pub fn new(settings: ControllerSettings) -> Self {
        Self {
            settings,
            toggle_mode_entered: false,
        }
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    /// Replace the settings. The toggle-mode flag is kept.
    pub fn set_settings(&mut self, settings: ControllerSettings) {
        self.settings = settings;
    }

    pub fn toggle_mode_entered(&self) -> bool {
        self.toggle_mode_entered
    }

    /// Process one host input callback. Returns one result per event.
    pub fn handle_input_turn<H: Host>(
        &mut self,
        host: &mut H,
        bindings: &mut KeyBindings,
        table: &mut SlotTable,
        dispatcher: &Dispatcher,
        events: &[ButtonEvent],
    ) -> Vec<InputResult> {
        if let Some(reason) = turn_gate(host, bindings) {
            trace!("input turn dropped: {reason:?}");
            return vec![InputResult::Dropped { reason }; events.len()];
        }

        events
            .iter()
            .map(|event| self.handle_event(host, bindings, table, dispatcher, event))
            .collect()
    }

    fn handle_event<H: Host>(
        &mut self,
        host: &mut H,
        bindings: &mut KeyBindings,
        table: &mut SlotTable,
        dispatcher: &Dispatcher,
        event: &ButtonEvent,
    ) -> InputResult {
        let Some(key) = resolve(event) else {
            return InputResult::Dropped {
                reason: DropReason::InvalidKey,
            };
        };
        if let Some(reason) = self.event_gate(host) {
            return InputResult::Dropped { reason };
        }

        let souls = self.settings.souls_style;
        if souls {
            bindings.set_top_execute(host.mapped_key(SHOUT_ACTION, event.device));
        }
        let roles = KeyRoles::classify(bindings, key);

        if self.settings.hide_outside_combat
            && !host.is_faded_in()
            && (roles.position.is_some() || roles.toggle || (souls && roles.power))
            && (event.is_down() || event.is_pressed())
        {
            host.fade_in();
        }

        let mut result = InputResult::Ignored;

        if let Some(position) = roles.position {
            if event.is_up() {
                debug!("{key} is up");
                table.reset_opacity(position);
                result = InputResult::Feedback { position };
            }
        }

        if souls && self.settings.execute_requires_combo && roles.toggle {
            if event.is_up() && self.toggle_mode_entered {
                self.toggle_mode_entered = false;
            }
            if event.is_down() {
                self.toggle_mode_entered = true;
            }
        }

        if !event.is_down() {
            return result;
        }

        if event.is_pressed() && roles.show_hide {
            host.toggle_visibility();
            result = InputResult::ToggledHud;
        }

        if event.is_pressed() && !souls && roles.toggle {
            debug!("{key} flips the page");
            let page = table.set_active_page(table.next_page_id());
            result = InputResult::PageFlipped { page };
        }

        if souls && event.is_pressed() {
            let combo = self.settings.execute_requires_combo;
            let toggle_is_enough = !combo && roles.toggle;
            let utility_requested = combo && self.toggle_mode_entered && roles.utility;

            if toggle_is_enough || utility_requested {
                result = execute_for_key(host, bindings, table, dispatcher, key, ExecuteMode::All);
            }
            if roles.power {
                // The game readies the shout itself; only instant slots need work.
                result = execute_for_key(
                    host,
                    bindings,
                    table,
                    dispatcher,
                    key,
                    ExecuteMode::InstantOnly,
                );
            }
        }

        if let Some(position) = roles.position {
            if let Some(pressed) =
                self.press_position(host, bindings, table, dispatcher, key, position)
            {
                result = pressed;
            } else if result == InputResult::Ignored {
                result = InputResult::Feedback { position };
            }
            // Dim whatever the press left active: the new page, or the
            // next ammo of a locked position.
            table.set_opacity(position, self.settings.slot_button_feedback);
        }

        result
    }

    /// A cycle key press. `None` means the press was already handled as a
    /// combo execute.
    fn press_position<H: Host>(
        &self,
        host: &mut H,
        bindings: &KeyBindings,
        table: &mut SlotTable,
        dispatcher: &Dispatcher,
        key: KeyId,
        position: Position,
    ) -> Option<InputResult> {
        debug!("{key} pressed for {position}");

        if !self.settings.souls_style {
            let outcomes = dispatcher.execute_position(host, table, position, ExecuteMode::All);
            return Some(InputResult::Executed {
                position,
                mode: ExecuteMode::All,
                outcomes,
            });
        }

        if self.settings.execute_requires_combo
            && self.toggle_mode_entered
            && bindings.bottom_action().matches(key)
        {
            return None;
        }

        if table.is_locked(position) {
            trace!("{position} is locked, stepping ammo");
            table.ammo_mut().advance();
            let equipped = dispatcher.execute_ammo(host, table);
            if equipped.is_some() {
                table.highlight_ammo();
            }
            return Some(InputResult::AmmoCycled { equipped });
        }

        let page = table.set_active_page_for(table.next_non_empty_page(position), position);
        if table.active_slots(position).is_none() {
            warn!("no slots for {position} at page {page}");
            return Some(InputResult::Missing { position });
        }
        table.highlight(position);

        let scroll_key = bindings.top_action().matches(key) || bindings.bottom_action().matches(key);
        let outcomes = if !scroll_key {
            dispatcher.execute_position(host, table, position, ExecuteMode::All)
        } else if position == Position::Top {
            // Mirrors the only-equip flag: select the power, never cast it.
            dispatcher.execute_position(host, table, position, ExecuteMode::EquipOnly)
        } else {
            Vec::new()
        };
        Some(InputResult::Cycled {
            position,
            page,
            outcomes,
        })
    }

    fn event_gate<H: Host>(&self, host: &H) -> Option<DropReason> {
        if host.is_game_paused() {
            Some(DropReason::GamePaused)
        } else if !host.is_hud_shown() {
            Some(DropReason::HudHidden)
        } else if self.settings.disable_input_quick_loot && host.is_quick_loot_open() {
            Some(DropReason::QuickLoot)
        } else if !host.is_movement_enabled() {
            Some(DropReason::MovementDisabled)
        } else {
            None
        }
    }
}

fn turn_gate<H: Host>(host: &H, bindings: &KeyBindings) -> Option<DropReason> {
    if !bindings.keys_configured() {
        Some(DropReason::KeysNotConfigured)
    } else if host.is_blocking_menu_open() {
        Some(DropReason::BlockingMenu)
    } else {
        None
    }
}

fn execute_for_key<H: Host>(
    host: &mut H,
    bindings: &KeyBindings,
    table: &mut SlotTable,
    dispatcher: &Dispatcher,
    key: KeyId,
    mode: ExecuteMode,
) -> InputResult {
    let Some(position) = bindings.position_for_key(key) else {
        warn!("no position for {key}");
        return InputResult::Ignored;
    };
    let outcomes = dispatcher.execute_position(host, table, position, mode);
    InputResult::Executed {
        position,
        mode,
        outcomes,
    }
}
