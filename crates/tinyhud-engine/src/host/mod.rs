//! Collaborator interfaces the engine drives.
//!
//! The engine never touches game state; it queries and commands the host
//! through these traits. [`recording::RecordingHost`] implements all of
//! them over plain data for tests and script replay.

pub mod recording;

use serde::{Deserialize, Serialize};
use tinyhud_common::{FormId, Hand, InputDevice};
use tinyhud_platform::KeyId;

/// The game's name for its native shout/power action.
pub const SHOUT_ACTION: &str = "Shout";

/// UI state consulted at the top of every input turn.
pub trait MenuState {
    /// Console, inventory, magic or favorites menu.
    fn is_blocking_menu_open(&self) -> bool;
    /// Movement controls enabled and the gameplay input context on top.
    fn is_movement_enabled(&self) -> bool;
    fn is_game_paused(&self) -> bool;
    fn is_hud_shown(&self) -> bool;
    fn is_quick_loot_open(&self) -> bool;
}

/// The game's own live key map.
pub trait ControlMap {
    /// The key `device` currently maps to `action`, or [`KeyId::NONE`].
    fn mapped_key(&self, action: &str, device: InputDevice) -> KeyId;
}

/// One ammo stack in the player's inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryAmmo {
    pub form: FormId,
    #[serde(default)]
    pub name: String,
    pub count: i32,
}

/// Equip, cast and inventory primitives.
///
/// Commands are fire-and-forget; only the queries feed back into
/// execution decisions.
pub trait Equipment {
    fn equipped(&self, hand: Hand) -> Option<FormId>;
    /// Current power or shout.
    fn selected_power(&self) -> Option<FormId>;
    fn is_worn(&self, form: FormId) -> bool;
    fn has_spell(&self, form: FormId) -> bool;
    fn magicka(&self) -> f32;
    fn spell_cost(&self, form: FormId) -> f32;
    fn item_count(&self, form: FormId) -> i32;
    fn ammo_inventory(&self) -> Vec<InventoryAmmo>;
    fn equipped_ammo(&self) -> Option<FormId>;

    fn equip(&mut self, form: FormId, hand: Hand);
    fn unequip(&mut self, hand: Hand);
    fn equip_armor(&mut self, form: FormId);
    fn equip_spell(&mut self, form: FormId, hand: Hand);
    fn equip_power(&mut self, form: FormId);
    fn equip_shout(&mut self, form: FormId);
    fn equip_ammo(&mut self, form: FormId);
    /// Cast without equipping; `hand` picks the casting source.
    fn cast_instant(&mut self, form: FormId, hand: Option<Hand>);
    fn damage_magicka(&mut self, amount: f32);
    fn flash_magicka_meter(&mut self);
    fn use_item(&mut self, form: FormId);
    fn remove_item(&mut self, form: FormId, count: u32);
}

/// The HUD overlay.
pub trait Overlay {
    fn toggle_visibility(&mut self);
    fn is_faded_in(&self) -> bool;
    fn fade_in(&mut self);
}

/// Everything the engine needs from its host.
pub trait Host: MenuState + ControlMap + Equipment + Overlay {}

impl<T: MenuState + ControlMap + Equipment + Overlay> Host for T {}
