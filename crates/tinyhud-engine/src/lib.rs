//! The quick-equip engine: turns input turns into slot cycling and the
//! equip/cast requests the host must carry out.

pub mod controller;
pub mod dispatch;
pub mod engine;
pub mod host;

pub use controller::{ControllerSettings, CyclingController, DropReason, InputResult};
pub use dispatch::{Dispatcher, ExecuteMode, SlotOutcome};
pub use engine::{EventOutcome, HudEngine};
pub use host::{ControlMap, Equipment, Host, InventoryAmmo, MenuState, Overlay};
