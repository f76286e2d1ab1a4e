use serde::Serialize;
use tinyhud_common::{FormId, Position};
use tinyhud_config::TinyHudConfig;

use crate::dispatch::{ExecuteMode, SlotOutcome};

/// Why an event was ignored before any key handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    KeysNotConfigured,
    BlockingMenu,
    GamePaused,
    HudHidden,
    QuickLoot,
    MovementDisabled,
    InvalidKey,
}

/// What one button event did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum InputResult {
    Dropped { reason: DropReason },
    /// Not a HUD key, or a release with nothing to do.
    Ignored,
    /// Key-down or key-up feedback only.
    Feedback { position: Position },
    ToggledHud,
    /// Legacy mode: every position moved to `page`.
    PageFlipped { page: u32 },
    /// Active slots executed without cycling.
    Executed {
        position: Position,
        mode: ExecuteMode,
        outcomes: Vec<SlotOutcome>,
    },
    /// Position advanced to `page`, then executed.
    Cycled {
        position: Position,
        page: u32,
        outcomes: Vec<SlotOutcome>,
    },
    /// Locked left position stepped its ammo ring. `equipped` is set when
    /// the step required an equip request.
    AmmoCycled { equipped: Option<FormId> },
    /// The cycle key of a position that has no slots at its new page.
    Missing { position: Position },
}

impl InputResult {
    pub fn outcomes(&self) -> &[SlotOutcome] {
        match self {
            InputResult::Executed { outcomes, .. } | InputResult::Cycled { outcomes, .. } => {
                outcomes
            }
            _ => &[],
        }
    }
}

/// The settings values the controller consults on every turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerSettings {
    pub souls_style: bool,
    pub execute_requires_combo: bool,
    pub slot_button_feedback: u8,
    pub hide_outside_combat: bool,
    pub disable_input_quick_loot: bool,
}

impl ControllerSettings {
    pub fn from_config(config: &TinyHudConfig) -> Self {
        Self {
            souls_style: config.controls.souls_style,
            execute_requires_combo: config.controls.bottom_execute_key_combo_only,
            slot_button_feedback: u8::try_from(config.hud.slot_button_feedback).unwrap_or(u8::MAX),
            hide_outside_combat: config.hud.hide_outside_combat,
            disable_input_quick_loot: config.misc.disable_input_quick_loot,
        }
    }
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self::from_config(&TinyHudConfig::default())
    }
}
