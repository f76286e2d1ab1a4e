//! Execution dispatcher: decides whether and how to ask the host to
//! equip, cast or use a slot's form.

mod equip;


use serde::Serialize;
use tinyhud_common::{ActionKind, FormId, Hand, Position};
use tinyhud_config::schema::MiscConfig;
use tinyhud_slots::{AmmoSlot, Form, SlotAssignment, SlotTable, SpellClass};
use tracing::{debug, trace};

use crate::host::Host;

/// Which assignments of a cell an execution touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMode {
    #[default]
    All,
    /// Skip instant actions. Used when the top position is cycled.
    EquipOnly,
    /// Only instant actions. The game handles a plain shout press itself.
    InstantOnly,
}

impl ExecuteMode {
    fn admits(self, action: ActionKind) -> bool {
        match self {
            ExecuteMode::All => true,
            ExecuteMode::EquipOnly => action != ActionKind::Instant,
            ExecuteMode::InstantOnly => action == ActionKind::Instant,
        }
    }
}

/// What happened to one assignment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SlotOutcome {
    /// Empty placeholder, or filtered out by the mode.
    Skipped,
    /// The actor already has it; nothing requested.
    Unchanged,
    /// A request went to the host.
    Issued,
    /// Spell not known or item not in inventory.
    NotPossessed { form: FormId },
    InsufficientMagicka { magicka: f32, cost: f32 },
}

/// Turns slot assignments into host requests.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    empty_hand_setting: bool,
}

impl Dispatcher {
    pub fn new(misc: &MiscConfig) -> Self {
        Self {
            empty_hand_setting: misc.empty_hand_setting,
        }
    }

    /// Execute every assignment of `slots` that `mode` admits.
    ///
    /// The table is only touched for the ranged-weapon lock and its ammo.
    pub fn execute<H: Host>(
        &self,
        host: &mut H,
        table: &mut SlotTable,
        slots: &[SlotAssignment],
        mode: ExecuteMode,
    ) -> Vec<SlotOutcome> {
        slots
            .iter()
            .map(|slot| {
                if !mode.admits(slot.action) {
                    trace!("{:?} slot filtered by {mode:?}", slot.action);
                    return SlotOutcome::Skipped;
                }
                self.execute_slot(host, table, slot)
            })
            .collect()
    }

    /// Execute the active slots of `position`.
    pub fn execute_position<H: Host>(
        &self,
        host: &mut H,
        table: &mut SlotTable,
        position: Position,
        mode: ExecuteMode,
    ) -> Vec<SlotOutcome> {
        let Some(slots) = table.active_slots(position).map(<[SlotAssignment]>::to_vec) else {
            return Vec::new();
        };
        self.execute(host, table, &slots, mode)
    }

    fn execute_slot<H: Host>(
        &self,
        host: &mut H,
        table: &mut SlotTable,
        slot: &SlotAssignment,
    ) -> SlotOutcome {
        let hand = equip_hand(slot);
        let Some(form) = &slot.form else {
            return self.empty_slot(host, table, slot.action, hand);
        };

        let outcome = match form {
            Form::Weapon { id, .. } => equip::weapon(host, *id, hand),
            Form::Armor { id, .. } => equip::armor(host, *id),
            Form::Spell { .. } => equip::spell(host, form, slot.action, hand),
            Form::Shout { id, .. } => equip::shout(host, *id),
            Form::Scroll { id, .. } => equip::scroll(host, *id, slot.action, hand),
            Form::Consumable { id, .. } => equip::consumable(host, *id),
            Form::Ammo { id, .. } => {
                host.equip_ammo(*id);
                table.ammo_mut().mark_equipped(*id);
                SlotOutcome::Issued
            }
        };

        let in_hand = matches!(outcome, SlotOutcome::Issued | SlotOutcome::Unchanged);
        if hand == Hand::Right && in_hand && takes_hand(form, slot.action) {
            self.update_ranged_lock(host, table, Some(form));
        }
        outcome
    }

    fn empty_slot<H: Host>(
        &self,
        host: &mut H,
        table: &mut SlotTable,
        action: ActionKind,
        hand: Hand,
    ) -> SlotOutcome {
        if action != ActionKind::UnEquip || !self.empty_hand_setting {
            return SlotOutcome::Skipped;
        }
        if host.equipped(hand).is_none() {
            return SlotOutcome::Unchanged;
        }
        host.unequip(hand);
        if hand == Hand::Right {
            self.update_ranged_lock(host, table, None);
        }
        SlotOutcome::Issued
    }

    /// A ranged weapon in the right hand locks the left position to its
    /// ammo; anything else in the right hand releases it.
    fn update_ranged_lock<H: Host>(&self, host: &mut H, table: &mut SlotTable, form: Option<&Form>) {
        let ranged = form.is_some_and(Form::is_ranged);
        if ranged {
            let entries = host
                .ammo_inventory()
                .into_iter()
                .map(|a| {
                    AmmoSlot::new(
                        Form::Ammo {
                            id: a.form,
                            name: a.name,
                        },
                        a.count,
                    )
                })
                .collect();
            table.ammo_mut().load(entries, host.equipped_ammo());
            table.set_locked(Position::Left, true);
            debug!("ranged weapon equipped, left locked to {} ammo", table.ammo().len());
            if host.equipped_ammo().is_none() {
                self.execute_ammo(host, table);
            }
        } else if table.is_locked(Position::Left) {
            table.set_locked(Position::Left, false);
            table.ammo_mut().clear();
            debug!("left position unlocked");
        }
    }

    /// Equip the ring's current ammo if it is not already equipped.
    pub fn execute_ammo<H: Host>(&self, host: &mut H, table: &mut SlotTable) -> Option<FormId> {
        let pending = table.ammo().pending()?;
        host.equip_ammo(pending);
        table.ammo_mut().mark_equipped(pending);
        Some(pending)
    }
}

/// Two-handed forms always go to the right hand.
fn equip_hand(slot: &SlotAssignment) -> Hand {
    if slot.two_handed {
        Hand::Right
    } else {
        slot.hand()
    }
}

/// Whether a successful request put something into a hand.
fn takes_hand(form: &Form, action: ActionKind) -> bool {
    match form {
        Form::Weapon { .. } => true,
        Form::Spell { class, .. } => {
            *class == SpellClass::Spell && action != ActionKind::Instant
        }
        _ => false,
    }
}
