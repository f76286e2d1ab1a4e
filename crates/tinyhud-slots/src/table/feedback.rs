//! Highlight and key-press opacity.

use tinyhud_common::Position;

use super::SlotTable;
use crate::slot::FULL_OPACITY;

impl SlotTable {
    /// Dim a position while its key is held. A locked position dims its
    /// ammo instead.
    pub fn set_opacity(&mut self, position: Position, opacity: u8) {
        if self.is_locked(position) {
            self.ammo.set_current_opacity(opacity);
            return;
        }
        if let Some(slots) = self.active_slots_mut(position) {
            for slot in slots {
                slot.feedback.opacity = opacity;
            }
        }
    }

    /// Restore full opacity on key release. The left position resets its
    /// current ammo too, whether or not it is still locked.
    pub fn reset_opacity(&mut self, position: Position) {
        if let Some(slots) = self.active_slots_mut(position) {
            for slot in slots {
                slot.feedback.opacity = FULL_OPACITY;
            }
        }
        if position == Position::Left {
            self.ammo.set_current_opacity(FULL_OPACITY);
        }
    }

    pub fn highlight(&mut self, position: Position) {
        if let Some(slots) = self.active_slots_mut(position) {
            for slot in slots {
                slot.feedback.highlight = true;
            }
        }
    }

    pub fn highlight_ammo(&mut self) {
        self.ammo.highlight_current();
    }

    /// Reset every highlight and opacity, slots and ammo alike.
    pub fn clear_highlights(&mut self) {
        for slot in self.cells.iter_mut().flatten() {
            slot.feedback.highlight = false;
            slot.feedback.opacity = FULL_OPACITY;
        }
        self.ammo.clear_highlights();
    }
}
