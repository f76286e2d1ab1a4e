//! Configuration schema types for the HUD.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the in-game menu ships with.

mod controls;
mod hud;
mod logging;
mod misc;
mod slots;

pub use controls::*;
pub use hud::*;
pub use logging::*;
pub use misc::*;
pub use slots::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TinyHudConfig {
    pub controls: ControlsConfig,
    pub hud: HudConfig,
    pub misc: MiscConfig,
    pub logging: LoggingConfig,
    /// Slot layout, one entry per configured (page, position) cell.
    pub slots: Vec<SlotEntryConfig>,
}

// =============================================================================
// Tests
// =============================================================================
