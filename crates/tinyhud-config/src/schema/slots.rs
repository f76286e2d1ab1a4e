//! Slot layout entries.

use serde::{Deserialize, Serialize};
use tinyhud_common::{ActionKind, FormId, Position, SlotKind};

/// How a spell is delivered once cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastingType {
    #[default]
    FireAndForget,
    Concentration,
    ConstantEffect,
}

/// Whether one entry covers both hands or splits right and left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandSetting {
    #[default]
    Both,
    Single,
}

/// A game object as the settings file describes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    pub id: FormId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub two_handed: bool,
    /// Bow or crossbow.
    #[serde(default)]
    pub ranged: bool,
    #[serde(default)]
    pub casting: CastingType,
}

/// One `[[slots]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotEntryConfig {
    pub page: u32,
    pub position: Position,
    #[serde(default)]
    pub kind: SlotKind,
    #[serde(default)]
    pub form: Option<FormConfig>,
    #[serde(default)]
    pub action: ActionKind,
    #[serde(default)]
    pub hand: HandSetting,
    #[serde(default)]
    pub left_kind: SlotKind,
    #[serde(default)]
    pub left_form: Option<FormConfig>,
    #[serde(default)]
    pub left_action: ActionKind,
}

impl SlotEntryConfig {
    /// An entry with only the right/primary side filled in.
    pub fn new(page: u32, position: Position, kind: SlotKind, form: Option<FormConfig>) -> Self {
        Self {
            page,
            position,
            kind,
            form,
            action: ActionKind::Default,
            hand: HandSetting::Both,
            left_kind: SlotKind::Empty,
            left_form: None,
            left_action: ActionKind::Default,
        }
    }

    /// Neither side names a form.
    pub fn is_formless(&self) -> bool {
        self.form.is_none() && self.left_form.is_none()
    }
}

impl FormConfig {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: FormId(id),
            name: name.into(),
            two_handed: false,
            ranged: false,
            casting: CastingType::FireAndForget,
        }
    }
}
