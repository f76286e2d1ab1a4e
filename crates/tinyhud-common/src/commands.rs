use serde::{Deserialize, Serialize};

use crate::types::{FormId, Hand};

/// Every side effect the engine can ask the host to perform.
///
/// The engine never mutates game state itself. Collaborators that record
/// what they were asked to do (test doubles, the replay binary) use this
/// enum as their log format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum HostCommand {
    // -- Equipment --
    Equip { form: FormId, hand: Hand },
    Unequip { hand: Hand },
    EquipArmor { form: FormId },
    EquipSpell { form: FormId, hand: Hand },
    EquipPower { form: FormId },
    EquipShout { form: FormId },
    EquipAmmo { form: FormId },

    // -- Casting --
    CastInstant { form: FormId, hand: Option<Hand> },
    DamageMagicka { amount: f32 },
    FlashMagickaMeter,

    // -- Items --
    UseItem { form: FormId },
    RemoveItem { form: FormId, count: u32 },

    // -- Overlay --
    ToggleHud,
    FadeIn,
}

impl HostCommand {
    /// Short label for log lines.
    pub fn label(&self) -> &'static str {
        match self {
            HostCommand::Equip { .. } => "equip",
            HostCommand::Unequip { .. } => "unequip",
            HostCommand::EquipArmor { .. } => "equip armor",
            HostCommand::EquipSpell { .. } => "equip spell",
            HostCommand::EquipPower { .. } => "equip power",
            HostCommand::EquipShout { .. } => "equip shout",
            HostCommand::EquipAmmo { .. } => "equip ammo",
            HostCommand::CastInstant { .. } => "cast instant",
            HostCommand::DamageMagicka { .. } => "damage magicka",
            HostCommand::FlashMagickaMeter => "flash magicka meter",
            HostCommand::UseItem { .. } => "use item",
            HostCommand::RemoveItem { .. } => "remove item",
            HostCommand::ToggleHud => "toggle hud",
            HostCommand::FadeIn => "fade in",
        }
    }

    /// Whether this command changes what the actor has equipped.
    pub fn is_equip(&self) -> bool {
        matches!(
            self,
            HostCommand::Equip { .. }
                | HostCommand::EquipArmor { .. }
                | HostCommand::EquipSpell { .. }
                | HostCommand::EquipPower { .. }
                | HostCommand::EquipShout { .. }
                | HostCommand::EquipAmmo { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_not_empty() {
        let commands = vec![
            HostCommand::Equip {
                form: FormId(1),
                hand: Hand::Right,
            },
            HostCommand::Unequip { hand: Hand::Left },
            HostCommand::CastInstant {
                form: FormId(2),
                hand: None,
            },
            HostCommand::FlashMagickaMeter,
            HostCommand::ToggleHud,
        ];
        for cmd in &commands {
            assert!(!cmd.label().is_empty(), "command {cmd:?} has empty label");
        }
    }

    #[test]
    fn equip_classification() {
        assert!(HostCommand::EquipShout { form: FormId(3) }.is_equip());
        assert!(!HostCommand::UseItem { form: FormId(3) }.is_equip());
        assert!(!HostCommand::DamageMagicka { amount: 5.0 }.is_equip());
    }

    #[test]
    fn serializes_with_command_tag() {
        let cmd = HostCommand::Equip {
            form: FormId(0x10),
            hand: Hand::Left,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(json, r#"{"command":"equip","form":16,"hand":"left"}"#);
    }
}
