use serde::{Deserialize, Serialize};

use crate::types::FormId;

/// Menus whose closing resets the cycle edit flags.
pub const ITEM_MENUS: [&str; 3] = ["InventoryMenu", "MagicMenu", "FavoritesMenu"];

/// The physical device a button event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputDevice {
    Keyboard,
    Mouse,
    Gamepad,
}

/// A raw button event as delivered by the host input callback.
///
/// For keyboard and mouse, `id_code` is the device scancode / button index.
/// For gamepads it is the button bitmask reported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ButtonEvent {
    pub device: InputDevice,
    pub id_code: u32,
    /// Analog value; 0.0 means released.
    pub value: f32,
    /// Seconds the button has been held.
    #[serde(default)]
    pub held_secs: f32,
}

impl ButtonEvent {
    /// First frame of a press.
    pub fn down(device: InputDevice, id_code: u32) -> Self {
        Self {
            device,
            id_code,
            value: 1.0,
            held_secs: 0.0,
        }
    }

    /// Release after `held_secs` seconds.
    pub fn up(device: InputDevice, id_code: u32, held_secs: f32) -> Self {
        Self {
            device,
            id_code,
            value: 0.0,
            held_secs,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.value != 0.0
    }

    pub fn is_down(&self) -> bool {
        self.value != 0.0 && self.held_secs == 0.0
    }

    pub fn is_held(&self) -> bool {
        self.value != 0.0 && self.held_secs > 0.0
    }

    pub fn is_up(&self) -> bool {
        self.value == 0.0 && self.held_secs != 0.0
    }
}

/// A menu opened or closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEvent {
    pub menu: String,
    pub opening: bool,
}

impl MenuEvent {
    pub fn closing(menu: impl Into<String>) -> Self {
        Self {
            menu: menu.into(),
            opening: false,
        }
    }

    /// Inventory, magic or favorites menu.
    pub fn is_item_menu(&self) -> bool {
        ITEM_MENUS.contains(&self.menu.as_str())
    }
}

/// The player's inventory count for `form` changed by `delta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountChange {
    pub form: FormId,
    pub delta: i32,
}

/// Everything the host can feed into the HUD engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum HostEvent {
    /// One input callback: the host may batch several button events.
    Input(Vec<ButtonEvent>),
    Menu(MenuEvent),
    InventoryCount(CountChange),
    /// Player asked for the settings to be re-read.
    Reload,
}
