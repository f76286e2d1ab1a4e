pub mod gamepad_keys;
pub mod input;

pub use gamepad_keys::{gamepad_index, gamepad_mask, gamepad_name};
pub use input::{resolve, EditFlags, KeyBindings, KeyId};
