use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four HUD positions a key can cycle.
///
/// The discriminant order is the one settings files and the slot table use
/// to index positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Power / shout slot.
    Top,
    Right,
    /// Utility slot (consumables, scrolls).
    Bottom,
    Left,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::Top,
        Position::Right,
        Position::Bottom,
        Position::Left,
    ];

    pub const COUNT: usize = 4;

    pub fn index(self) -> usize {
        match self {
            Position::Top => 0,
            Position::Right => 1,
            Position::Bottom => 2,
            Position::Left => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Position::Top => "top",
            Position::Right => "right",
            Position::Bottom => "bottom",
            Position::Left => "left",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which hand an equip request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn from_left_flag(left: bool) -> Self {
        if left {
            Hand::Left
        } else {
            Hand::Right
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hand::Left => f.write_str("left"),
            Hand::Right => f.write_str("right"),
        }
    }
}

/// What executing a slot should do with its form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Equip the form (or ready it, for scrolls and powers).
    #[default]
    Default,
    /// Cast or use immediately without equipping.
    Instant,
    /// Empty the hand.
    UnEquip,
}

/// The kind of object a slot holds, stored with the slot so execution
/// never has to re-inspect the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    #[default]
    Empty,
    Weapon,
    Shield,
    /// Hand-equipped spell.
    Magic,
    /// Power or lesser power.
    Power,
    Shout,
    Consumable,
    Scroll,
    Armor,
}

impl SlotKind {
    /// Kinds that can occupy one hand, and so may be split left/right.
    pub fn is_handed(self) -> bool {
        matches!(
            self,
            SlotKind::Empty | SlotKind::Weapon | SlotKind::Shield | SlotKind::Magic
        )
    }

    /// Kinds whose item count is tracked from inventory notifications.
    pub fn tracks_count(self) -> bool {
        matches!(self, SlotKind::Consumable | SlotKind::Scroll)
    }
}

/// Host-assigned identifier of a game object (weapon, spell, potion, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(pub u32);

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}
