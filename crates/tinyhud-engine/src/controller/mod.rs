//! Cycling controller: the per-turn input state machine.
//!
//! [`CyclingController::handle_input_turn`] walks a batch of button events,
//! gates each one on menu state, classifies the key against the
//! [`KeyBindings`](tinyhud_platform::KeyBindings) and either cycles a
//! position, executes its active slots, or adjusts feedback.

mod processor;
mod types;

#[cfg(test)]
mod tests;

pub use processor::CyclingController;
pub use types::{ControllerSettings, DropReason, InputResult};
