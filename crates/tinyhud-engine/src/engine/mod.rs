//! The top-level context that owns every piece of HUD state.
//!
//! A host adapter creates one [`HudEngine`] and forwards its callbacks
//! (input batches, menu changes, inventory counts, reload requests) to it
//! one at a time. Nothing here blocks or spawns.

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use serde::Serialize;
use tinyhud_common::{ButtonEvent, CountChange, HostEvent, MenuEvent, Position};
use tinyhud_config::toml_loader::load_from_path;
use tinyhud_config::TinyHudConfig;
use tinyhud_platform::KeyBindings;
use tinyhud_slots::SlotTable;
use tracing::{debug, info};

use crate::controller::{ControllerSettings, CyclingController, InputResult};
use crate::dispatch::{Dispatcher, ExecuteMode, SlotOutcome};
use crate::host::Host;

/// What handling one [`HostEvent`] produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventOutcome {
    Input { results: Vec<InputResult> },
    Menu { cleared_edit_flags: bool },
    Count { applied: bool },
    Reloaded { outcomes: Vec<SlotOutcome> },
}

#[derive(Debug)]
pub struct HudEngine {
    config: TinyHudConfig,
    config_path: Option<PathBuf>,
    bindings: KeyBindings,
    table: SlotTable,
    controller: CyclingController,
    dispatcher: Dispatcher,
}

impl HudEngine {
    pub fn new(config: TinyHudConfig) -> Self {
        let table = SlotTable::from_config(&config);
        Self {
            bindings: KeyBindings::from_config(&config.controls),
            controller: CyclingController::new(ControllerSettings::from_config(&config)),
            dispatcher: Dispatcher::new(&config.misc),
            table,
            config,
            config_path: None,
        }
    }

    /// Remember where the settings came from so [`HostEvent::Reload`]
    /// re-reads the file.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Bring the actor in line with the HUD: seed item counts and execute
    /// the active left then right slots.
    pub fn start<H: Host>(&mut self, host: &mut H) -> Vec<SlotOutcome> {
        self.table.refresh_counts(|id| host.item_count(id));
        let outcomes = self.execute_hands(host);
        info!(
            "hud engine started with {} pages",
            self.table.max_page_count()
        );
        outcomes
    }

    pub fn on_input<H: Host>(&mut self, host: &mut H, events: &[ButtonEvent]) -> Vec<InputResult> {
        self.controller.handle_input_turn(
            host,
            &mut self.bindings,
            &mut self.table,
            &self.dispatcher,
            events,
        )
    }

    /// Returns whether any edit flag was cleared.
    pub fn on_menu(&mut self, event: &MenuEvent) -> bool {
        self.bindings.on_menu_event(event)
    }

    pub fn on_count_changed(&mut self, change: CountChange) -> bool {
        self.table.apply_count_change(change.form, change.delta)
    }

    /// Swap in a table built from `config`.
    ///
    /// The new table is fully built before it replaces the old one, so no
    /// input turn can see it half-built. Active pages, locks and the ammo
    /// ring carry over; the active hands are then re-executed.
    pub fn reload<H: Host>(&mut self, host: &mut H, config: TinyHudConfig) -> Vec<SlotOutcome> {
        let mut table = SlotTable::from_config(&config);
        table.carry_over(&self.table);
        table.refresh_counts(|id| host.item_count(id));

        self.table = table;
        self.bindings = KeyBindings::from_config(&config.controls);
        self.controller
            .set_settings(ControllerSettings::from_config(&config));
        self.dispatcher = Dispatcher::new(&config.misc);
        self.config = config;
        info!("settings reloaded");

        self.execute_hands(host)
    }

    /// Route one host callback.
    pub fn handle_event<H: Host>(
        &mut self,
        host: &mut H,
        event: &HostEvent,
    ) -> tinyhud_common::Result<EventOutcome> {
        let outcome = match event {
            HostEvent::Input(events) => EventOutcome::Input {
                results: self.on_input(host, events),
            },
            HostEvent::Menu(menu) => EventOutcome::Menu {
                cleared_edit_flags: self.on_menu(menu),
            },
            HostEvent::InventoryCount(change) => EventOutcome::Count {
                applied: self.on_count_changed(*change),
            },
            HostEvent::Reload => {
                let config = match &self.config_path {
                    Some(path) => load_from_path(path)?,
                    None => self.config.clone(),
                };
                EventOutcome::Reloaded {
                    outcomes: self.reload(host, config),
                }
            }
        };
        Ok(outcome)
    }

    /// Called by the renderer once its highlight flash has finished.
    pub fn clear_highlights(&mut self) {
        self.table.clear_highlights();
    }

    fn execute_hands<H: Host>(&mut self, host: &mut H) -> Vec<SlotOutcome> {
        let mut outcomes = Vec::new();
        for position in [Position::Left, Position::Right] {
            if self.table.is_locked(position) {
                debug!("{position} is locked, not executed");
                continue;
            }
            let executed =
                self.dispatcher
                    .execute_position(host, &mut self.table, position, ExecuteMode::All);
            debug!("{position} executed: {executed:?}");
            outcomes.extend(executed);
        }
        outcomes
    }

    // -- Accessors --

    pub fn config(&self) -> &TinyHudConfig {
        &self.config
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    pub fn table(&self) -> &SlotTable {
        &self.table
    }

    /// For in-game edits (`set_single_slot`, `queue_slots`).
    pub fn table_mut(&mut self) -> &mut SlotTable {
        &mut self.table
    }

    pub fn controller(&self) -> &CyclingController {
        &self.controller
    }
}
