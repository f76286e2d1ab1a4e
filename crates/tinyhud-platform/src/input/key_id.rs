use std::fmt;

use serde::{Deserialize, Serialize};
use tinyhud_common::{ButtonEvent, InputDevice};

use crate::gamepad_keys::{gamepad_index, gamepad_name, GAMEPAD_BUTTON_COUNT};

/// A canonical key identifier shared by all input devices.
///
/// Keyboard scancodes occupy `[0, 256)`, mouse buttons `[256, 266)` and
/// gamepad buttons `[266, 266 + 16)`. Bindings stored in settings use the
/// same numbering, so [`resolve`] must reproduce them bit for bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyId(pub u32);

impl KeyId {
    /// "No key". Never matches anything, including itself.
    pub const NONE: KeyId = KeyId(u32::MAX);

    pub const KEYBOARD_OFFSET: u32 = 0;
    pub const MOUSE_OFFSET: u32 = 256;
    pub const GAMEPAD_OFFSET: u32 = 266;
    pub const GAMEPAD_END: u32 = Self::GAMEPAD_OFFSET + GAMEPAD_BUTTON_COUNT;

    /// Build from an optional configured code.
    pub fn from_config(code: Option<u32>) -> Self {
        code.map(KeyId).unwrap_or(Self::NONE)
    }

    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// True only if both keys are valid and equal.
    ///
    /// Two unset bindings must not be treated as the same key.
    pub fn matches(self, other: KeyId) -> bool {
        self.is_valid() && other.is_valid() && self == other
    }

    /// The device range this identifier falls in.
    pub fn device(self) -> Option<InputDevice> {
        match self.0 {
            c if c < Self::MOUSE_OFFSET => Some(InputDevice::Keyboard),
            c if c < Self::GAMEPAD_OFFSET => Some(InputDevice::Mouse),
            c if c < Self::GAMEPAD_END => Some(InputDevice::Gamepad),
            _ => None,
        }
    }
}

impl Default for KeyId {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.device() {
            Some(InputDevice::Keyboard) => write!(f, "key {}", self.0),
            Some(InputDevice::Mouse) => write!(f, "mouse {}", self.0 - Self::MOUSE_OFFSET),
            Some(InputDevice::Gamepad) => {
                let index = self.0 - Self::GAMEPAD_OFFSET;
                write!(f, "gamepad {}", gamepad_name(index).unwrap_or("?"))
            }
            None => f.write_str("<none>"),
        }
    }
}

/// Normalize a raw button event into its canonical [`KeyId`].
///
/// Returns `None` for codes outside their device's range and for gamepad
/// masks that are not in the button table.
pub fn resolve(event: &ButtonEvent) -> Option<KeyId> {
    let code = event.id_code;
    if code == u32::MAX {
        return None;
    }
    match event.device {
        InputDevice::Keyboard => {
            let id = KeyId::KEYBOARD_OFFSET + code;
            (id < KeyId::MOUSE_OFFSET).then_some(KeyId(id))
        }
        InputDevice::Mouse => {
            let id = KeyId::MOUSE_OFFSET.checked_add(code)?;
            (id < KeyId::GAMEPAD_OFFSET).then_some(KeyId(id))
        }
        InputDevice::Gamepad => gamepad_index(code).map(|i| KeyId(KeyId::GAMEPAD_OFFSET + i)),
    }
}
