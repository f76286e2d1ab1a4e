//! Tagged form variants.
//!
//! The slot table stores what a form *is* when the layout is built, so
//! execution matches on the variant instead of asking the host again.

use serde::Serialize;
use tinyhud_common::{FormId, SlotError, SlotKind};
use tinyhud_config::schema::{CastingType, FormConfig};

/// Whether a spell form is hand-cast or a power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellClass {
    Spell,
    /// Power or lesser power, equipped into the voice slot.
    Power,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Form {
    Weapon {
        id: FormId,
        name: String,
        two_handed: bool,
        ranged: bool,
    },
    Spell {
        id: FormId,
        name: String,
        casting: CastingType,
        class: SpellClass,
    },
    Shout {
        id: FormId,
        name: String,
    },
    Scroll {
        id: FormId,
        name: String,
    },
    /// Worn armor and shields.
    Armor {
        id: FormId,
        name: String,
    },
    Ammo {
        id: FormId,
        name: String,
    },
    Consumable {
        id: FormId,
        name: String,
    },
}

impl Form {
    /// Build the variant a settings entry describes.
    pub fn from_config(kind: SlotKind, config: &FormConfig) -> Result<Self, SlotError> {
        let id = config.id;
        let name = config.name.clone();
        let form = match kind {
            SlotKind::Weapon => Form::Weapon {
                id,
                name,
                two_handed: config.two_handed,
                ranged: config.ranged,
            },
            SlotKind::Magic => Form::Spell {
                id,
                name,
                casting: config.casting,
                class: SpellClass::Spell,
            },
            SlotKind::Power => Form::Spell {
                id,
                name,
                casting: config.casting,
                class: SpellClass::Power,
            },
            SlotKind::Shout => Form::Shout { id, name },
            SlotKind::Scroll => Form::Scroll { id, name },
            SlotKind::Shield | SlotKind::Armor => Form::Armor { id, name },
            SlotKind::Consumable => Form::Consumable { id, name },
            SlotKind::Empty => {
                return Err(SlotError::UnknownForm(format!(
                    "{id} ({}) has slot kind empty",
                    config.name
                )))
            }
        };
        Ok(form)
    }

    pub fn id(&self) -> FormId {
        match self {
            Form::Weapon { id, .. }
            | Form::Spell { id, .. }
            | Form::Shout { id, .. }
            | Form::Scroll { id, .. }
            | Form::Armor { id, .. }
            | Form::Ammo { id, .. }
            | Form::Consumable { id, .. } => *id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Form::Weapon { name, .. }
            | Form::Spell { name, .. }
            | Form::Shout { name, .. }
            | Form::Scroll { name, .. }
            | Form::Armor { name, .. }
            | Form::Ammo { name, .. }
            | Form::Consumable { name, .. } => name,
        }
    }

    /// Fire-and-forget spells, powers and scrolls can be used without
    /// being equipped.
    pub fn can_instant_cast(&self) -> bool {
        match self {
            Form::Spell {
                class: SpellClass::Power,
                ..
            } => true,
            Form::Spell { casting, .. } => *casting != CastingType::Concentration,
            Form::Scroll { .. } => true,
            _ => false,
        }
    }

    pub fn is_two_handed(&self) -> bool {
        matches!(self, Form::Weapon { two_handed: true, .. })
    }

    /// Bows and crossbows.
    pub fn is_ranged(&self) -> bool {
        matches!(self, Form::Weapon { ranged: true, .. })
    }
}
