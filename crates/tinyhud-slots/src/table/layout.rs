//! Building a table from `[[slots]]` settings entries.

use tinyhud_common::{ActionKind, Position, SlotError, SlotKind};
use tinyhud_config::schema::{FormConfig, HandSetting, SlotEntryConfig};
use tinyhud_config::TinyHudConfig;
use tracing::{debug, warn};

use super::SlotTable;
use crate::form::Form;
use crate::slot::SlotAssignment;

impl SlotTable {
    /// Build a fresh table from settings.
    ///
    /// Entries that cannot be used are logged and skipped; their cells
    /// stay empty.
    pub fn from_config(config: &TinyHudConfig) -> Self {
        let mut table = SlotTable::new(config.misc.max_page_count);

        for entry in &config.slots {
            let result = build_cell(entry, config.misc.action_check)
                .and_then(|cell| table.replace_cell(entry.page, entry.position, cell));
            if let Err(e) = result {
                warn!("skipping slot entry: {e}");
            }
        }

        table.recompute_highest_pages();
        debug!(
            "built slot table: {} pages, highest {:?}",
            table.max_page_count,
            Position::ALL.map(|p| table.highest_used_page(p))
        );
        table
    }

    /// Keep cycling state from the table this one replaces.
    ///
    /// Active pages past the new maximum reset to 0. Locks and the ammo
    /// ring follow the actor's equipment, which a reload does not change.
    pub fn carry_over(&mut self, previous: &SlotTable) {
        for position in Position::ALL {
            self.set_active_page_for(previous.active_page(position), position);
            self.set_locked(position, previous.is_locked(position));
        }
        self.ammo = previous.ammo.clone();
    }
}

/// Turn one settings entry into the assignments for its cell.
pub(super) fn build_cell(
    entry: &SlotEntryConfig,
    action_check: bool,
) -> Result<Vec<SlotAssignment>, SlotError> {
    if entry.is_formless() && entry.action != ActionKind::UnEquip {
        return Err(SlotError::EmptyAssignment {
            page: entry.page,
            position: entry.position,
        });
    }

    let mut action = entry.action;
    let mut left_action = entry.left_action;
    if action_check && action != left_action {
        warn!(
            "page {} {}: actions {action:?} and {left_action:?} differ, using default for both",
            entry.page, entry.position
        );
        action = ActionKind::Default;
        left_action = ActionKind::Default;
    }

    let mut hand = entry.hand;
    if !entry.kind.is_handed() && hand == HandSetting::Single {
        warn!(
            "page {} {}: {:?} cannot be split across hands",
            entry.page, entry.position, entry.kind
        );
        hand = HandSetting::Both;
    }
    if entry.kind == SlotKind::Shield && entry.position == Position::Right {
        warn!("equipping a shield in the right hand may fail or leave the hand empty");
    }

    // The left position's primary side is the left hand.
    let primary_left = entry.position == Position::Left;
    let mut cell = vec![build_side(
        entry.kind,
        entry.form.as_ref(),
        action,
        primary_left,
    )?];
    if hand == HandSetting::Single {
        cell.push(build_side(
            entry.left_kind,
            entry.left_form.as_ref(),
            left_action,
            true,
        )?);
    }
    Ok(cell)
}

fn build_side(
    kind: SlotKind,
    form: Option<&FormConfig>,
    mut action: ActionKind,
    left: bool,
) -> Result<SlotAssignment, SlotError> {
    let Some(config) = form else {
        return Ok(if action == ActionKind::UnEquip {
            SlotAssignment::un_equip(left)
        } else {
            SlotAssignment {
                left,
                ..SlotAssignment::empty()
            }
        });
    };

    let form = Form::from_config(kind, config)?;

    if action == ActionKind::UnEquip {
        warn!("{} has a form but un-equip action, using default", form.id());
        action = ActionKind::Default;
    }
    if action == ActionKind::Instant && !form.can_instant_cast() {
        warn!("{} cannot be instant cast, using default", form.id());
        action = ActionKind::Default;
    }

    Ok(SlotAssignment::new(form, kind, action, left))
}
