//! Gamepad button mask normalization.
//!
//! Gamepad drivers report buttons as bitmask values. The HUD stores gamepad
//! keys as `GAMEPAD_OFFSET + index`, where `index` is the button's row in
//! [`GAMEPAD_BUTTONS`]. Settings files written by the in-game menu use the
//! same numbering, so the table order must not change.

/// `(mask, name)` for every supported gamepad button, in index order.
const GAMEPAD_BUTTONS: [(u32, &str); 16] = [
    (0x0001, "DPad Up"),
    (0x0002, "DPad Down"),
    (0x0004, "DPad Left"),
    (0x0008, "DPad Right"),
    (0x0010, "Start"),
    (0x0020, "Back"),
    (0x0040, "Left Thumb"),
    (0x0080, "Right Thumb"),
    (0x0100, "Left Shoulder"),
    (0x0200, "Right Shoulder"),
    (0x1000, "A"),
    (0x2000, "B"),
    (0x4000, "X"),
    (0x8000, "Y"),
    (0x0009, "Left Trigger"),
    (0x000A, "Right Trigger"),
];

/// Number of gamepad buttons; the gamepad key range is this wide.
pub const GAMEPAD_BUTTON_COUNT: u32 = GAMEPAD_BUTTONS.len() as u32;

/// Map a driver button mask to its table index.
///
/// Returns `None` for masks the HUD does not know (chords, guide button).
pub fn gamepad_index(mask: u32) -> Option<u32> {
    GAMEPAD_BUTTONS
        .iter()
        .position(|(m, _)| *m == mask)
        .map(|i| i as u32)
}

/// Inverse of [`gamepad_index`].
pub fn gamepad_mask(index: u32) -> Option<u32> {
    GAMEPAD_BUTTONS.get(index as usize).map(|(m, _)| *m)
}

/// Human-readable button name for a table index.
pub fn gamepad_name(index: u32) -> Option<&'static str> {
    GAMEPAD_BUTTONS.get(index as usize).map(|(_, n)| *n)
}
