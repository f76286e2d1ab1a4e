//! A host over plain data that records every command it receives.
//!
//! Commands are applied to [`HostState`] the way the game would apply
//! them, so repeated executions see the results of earlier ones.

use serde::{Deserialize, Serialize};
use tinyhud_common::{CountChange, FormId, Hand, HostCommand, InputDevice};
use tinyhud_platform::KeyId;
use tracing::debug;

use super::{ControlMap, Equipment, InventoryAmmo, MenuState, Overlay, SHOUT_ACTION};

/// A spell the player knows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnownSpell {
    pub form: FormId,
    #[serde(default)]
    pub cost: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub form: FormId,
    pub count: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuFlags {
    pub blocking_menu_open: bool,
    pub movement_enabled: bool,
    pub game_paused: bool,
    pub hud_shown: bool,
    pub quick_loot_open: bool,
}

impl Default for MenuFlags {
    fn default() -> Self {
        Self {
            blocking_menu_open: false,
            movement_enabled: true,
            game_paused: false,
            hud_shown: true,
            quick_loot_open: false,
        }
    }
}

/// Game-side state the host answers queries from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostState {
    pub magicka: f32,
    pub right_hand: Option<FormId>,
    pub left_hand: Option<FormId>,
    pub selected_power: Option<FormId>,
    pub worn: Vec<FormId>,
    pub spells: Vec<KnownSpell>,
    pub items: Vec<ItemStack>,
    pub ammo: Vec<InventoryAmmo>,
    pub equipped_ammo: Option<FormId>,
    /// Canonical key id mapped to the game's shout action.
    pub shout_key: Option<u32>,
    pub menus: MenuFlags,
    pub hud_visible: bool,
    pub hud_faded_in: bool,
}

impl Default for HostState {
    fn default() -> Self {
        Self {
            magicka: 100.0,
            right_hand: None,
            left_hand: None,
            selected_power: None,
            worn: Vec::new(),
            spells: Vec::new(),
            items: Vec::new(),
            ammo: Vec::new(),
            equipped_ammo: None,
            shout_key: None,
            menus: MenuFlags::default(),
            hud_visible: true,
            hud_faded_in: true,
        }
    }
}

impl HostState {
    fn count_mut(&mut self, form: FormId) -> Option<&mut i32> {
        if let Some(stack) = self.items.iter_mut().find(|s| s.form == form) {
            return Some(&mut stack.count);
        }
        self.ammo
            .iter_mut()
            .find(|a| a.form == form)
            .map(|a| &mut a.count)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub state: HostState,
    commands: Vec<HostCommand>,
    count_changes: Vec<CountChange>,
}

impl RecordingHost {
    pub fn new(state: HostState) -> Self {
        Self {
            state,
            commands: Vec::new(),
            count_changes: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[HostCommand] {
        &self.commands
    }

    /// Take the commands recorded since the last call.
    pub fn drain_commands(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Inventory changes the recorded commands caused, for feeding back
    /// into the engine as count notifications.
    pub fn drain_count_changes(&mut self) -> Vec<CountChange> {
        std::mem::take(&mut self.count_changes)
    }

    fn record(&mut self, command: HostCommand) {
        debug!("host command: {}", command.label());
        self.commands.push(command);
    }

    fn change_count(&mut self, form: FormId, delta: i32) {
        if let Some(count) = self.state.count_mut(form) {
            *count = count.saturating_add(delta).max(0);
            self.count_changes.push(CountChange { form, delta });
        }
    }

    fn hand_mut(&mut self, hand: Hand) -> &mut Option<FormId> {
        match hand {
            Hand::Left => &mut self.state.left_hand,
            Hand::Right => &mut self.state.right_hand,
        }
    }
}

impl MenuState for RecordingHost {
    fn is_blocking_menu_open(&self) -> bool {
        self.state.menus.blocking_menu_open
    }

    fn is_movement_enabled(&self) -> bool {
        self.state.menus.movement_enabled
    }

    fn is_game_paused(&self) -> bool {
        self.state.menus.game_paused
    }

    fn is_hud_shown(&self) -> bool {
        self.state.menus.hud_shown
    }

    fn is_quick_loot_open(&self) -> bool {
        self.state.menus.quick_loot_open
    }
}

impl ControlMap for RecordingHost {
    fn mapped_key(&self, action: &str, device: InputDevice) -> KeyId {
        if action != SHOUT_ACTION {
            return KeyId::NONE;
        }
        let key = KeyId::from_config(self.state.shout_key);
        if key.device() == Some(device) {
            key
        } else {
            KeyId::NONE
        }
    }
}

impl Equipment for RecordingHost {
    fn equipped(&self, hand: Hand) -> Option<FormId> {
        match hand {
            Hand::Left => self.state.left_hand,
            Hand::Right => self.state.right_hand,
        }
    }

    fn selected_power(&self) -> Option<FormId> {
        self.state.selected_power
    }

    fn is_worn(&self, form: FormId) -> bool {
        self.state.worn.contains(&form)
    }

    fn has_spell(&self, form: FormId) -> bool {
        self.state.spells.iter().any(|s| s.form == form)
    }

    fn magicka(&self) -> f32 {
        self.state.magicka
    }

    fn spell_cost(&self, form: FormId) -> f32 {
        self.state
            .spells
            .iter()
            .find(|s| s.form == form)
            .map(|s| s.cost)
            .unwrap_or(0.0)
    }

    fn item_count(&self, form: FormId) -> i32 {
        self.state
            .items
            .iter()
            .find(|s| s.form == form)
            .map(|s| s.count)
            .unwrap_or(0)
    }

    fn ammo_inventory(&self) -> Vec<InventoryAmmo> {
        self.state
            .ammo
            .iter()
            .filter(|a| a.count > 0)
            .cloned()
            .collect()
    }

    fn equipped_ammo(&self) -> Option<FormId> {
        self.state.equipped_ammo
    }

    fn equip(&mut self, form: FormId, hand: Hand) {
        *self.hand_mut(hand) = Some(form);
        self.record(HostCommand::Equip { form, hand });
    }

    fn unequip(&mut self, hand: Hand) {
        *self.hand_mut(hand) = None;
        self.record(HostCommand::Unequip { hand });
    }

    fn equip_armor(&mut self, form: FormId) {
        if !self.state.worn.contains(&form) {
            self.state.worn.push(form);
        }
        self.record(HostCommand::EquipArmor { form });
    }

    fn equip_spell(&mut self, form: FormId, hand: Hand) {
        *self.hand_mut(hand) = Some(form);
        self.record(HostCommand::EquipSpell { form, hand });
    }

    fn equip_power(&mut self, form: FormId) {
        self.state.selected_power = Some(form);
        self.record(HostCommand::EquipPower { form });
    }

    fn equip_shout(&mut self, form: FormId) {
        self.state.selected_power = Some(form);
        self.record(HostCommand::EquipShout { form });
    }

    fn equip_ammo(&mut self, form: FormId) {
        self.state.equipped_ammo = Some(form);
        self.record(HostCommand::EquipAmmo { form });
    }

    fn cast_instant(&mut self, form: FormId, hand: Option<Hand>) {
        self.record(HostCommand::CastInstant { form, hand });
    }

    fn damage_magicka(&mut self, amount: f32) {
        self.state.magicka = (self.state.magicka - amount).max(0.0);
        self.record(HostCommand::DamageMagicka { amount });
    }

    fn flash_magicka_meter(&mut self) {
        self.record(HostCommand::FlashMagickaMeter);
    }

    fn use_item(&mut self, form: FormId) {
        self.change_count(form, -1);
        self.record(HostCommand::UseItem { form });
    }

    fn remove_item(&mut self, form: FormId, count: u32) {
        self.change_count(form, -(count as i32));
        self.record(HostCommand::RemoveItem { form, count });
    }
}

impl Overlay for RecordingHost {
    fn toggle_visibility(&mut self) {
        self.state.hud_visible = !self.state.hud_visible;
        self.record(HostCommand::ToggleHud);
    }

    fn is_faded_in(&self) -> bool {
        self.state.hud_faded_in
    }

    fn fade_in(&mut self) {
        self.state.hud_faded_in = true;
        self.record(HostCommand::FadeIn);
    }
}
