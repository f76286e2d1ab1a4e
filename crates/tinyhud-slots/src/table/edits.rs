//! Cell replacement, queued bindings and item counts.

use tinyhud_common::{FormId, Position, SlotError};
use tracing::{debug, trace, warn};

use super::SlotTable;
use crate::slot::SlotAssignment;

impl SlotTable {
    pub(super) fn replace_cell(
        &mut self,
        page: u32,
        position: Position,
        cell: Vec<SlotAssignment>,
    ) -> Result<(), SlotError> {
        let index = self
            .cell_index(page, position)
            .ok_or(SlotError::PageOutOfRange {
                page,
                position,
                max: self.max_page_count,
            })?;
        self.cells[index] = cell;
        Ok(())
    }

    /// Replace one cell. An empty list stores the empty placeholder.
    pub fn set_single_slot(
        &mut self,
        page: u32,
        position: Position,
        slots: Vec<SlotAssignment>,
    ) -> Result<(), SlotError> {
        let cell = if slots.is_empty() {
            warn!("no slots given for page {page} {position}, storing empty");
            vec![SlotAssignment::empty()]
        } else {
            slots
        };
        self.replace_cell(page, position, cell)?;
        self.recompute_highest_pages();
        Ok(())
    }

    /// Append each assignment as its own page after the position's highest
    /// used page. Assignments that would land past the max are dropped.
    ///
    /// Returns the pages written.
    pub fn queue_slots(&mut self, position: Position, slots: Vec<SlotAssignment>) -> Vec<u32> {
        let mut page = self
            .highest_used_page(position)
            .map(|highest| highest + 1)
            .unwrap_or(0);
        let mut written = Vec::new();

        for slot in slots {
            if let Err(e) = self.replace_cell(page, position, vec![slot]) {
                warn!("cannot queue slot: {e}");
                break;
            }
            trace!("queued slot on page {page} {position}");
            written.push(page);
            page += 1;
        }

        self.recompute_highest_pages();
        written
    }

    /// Apply an inventory delta to every tracked slot and ammo entry for
    /// `form`. Counts stop at zero. Returns whether anything matched.
    pub fn apply_count_change(&mut self, form: FormId, delta: i32) -> bool {
        let mut changed = false;
        for slot in self.cells.iter_mut().flatten() {
            if slot.kind.tracks_count() && slot.form_id() == Some(form) {
                slot.item_count = slot.item_count.saturating_add(delta).max(0);
                changed = true;
            }
        }
        changed |= self.ammo.apply_count_change(form, delta);
        if changed {
            debug!("count for {form} changed by {delta}");
        }
        changed
    }

    /// Seed counts for every tracked slot, e.g. right after a rebuild.
    pub fn refresh_counts(&mut self, count_of: impl Fn(FormId) -> i32) {
        for slot in self.cells.iter_mut().flatten() {
            if !slot.kind.tracks_count() {
                continue;
            }
            if let Some(id) = slot.form_id() {
                slot.item_count = count_of(id).max(0);
            }
        }
    }
}
