//! Ammo paired with an equipped ranged weapon.
//!
//! While a bow or crossbow is in the right hand the left position is
//! locked and its key cycles this ring instead of pages.

use serde::Serialize;
use tinyhud_common::FormId;

use crate::form::Form;
use crate::slot::{Feedback, FULL_OPACITY};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmmoSlot {
    pub form: Form,
    pub item_count: i32,
    pub feedback: Feedback,
}

impl AmmoSlot {
    pub fn new(form: Form, item_count: i32) -> Self {
        Self {
            form,
            item_count,
            feedback: Feedback::default(),
        }
    }
}

/// Ordered ammo choices plus the one the actor has equipped.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AmmoRing {
    entries: Vec<AmmoSlot>,
    current: usize,
    equipped: Option<FormId>,
}

impl AmmoRing {
    /// Replace the ring. The equipped ammo, if listed, becomes current.
    pub fn load(&mut self, entries: Vec<AmmoSlot>, equipped: Option<FormId>) {
        self.current = equipped
            .and_then(|id| entries.iter().position(|a| a.form.id() == id))
            .unwrap_or(0);
        self.entries = entries;
        self.equipped = equipped;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.current = 0;
        self.equipped = None;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[AmmoSlot] {
        &self.entries
    }

    pub fn current(&self) -> Option<&AmmoSlot> {
        self.entries.get(self.current)
    }

    pub fn current_mut(&mut self) -> Option<&mut AmmoSlot> {
        self.entries.get_mut(self.current)
    }

    pub fn equipped(&self) -> Option<FormId> {
        self.equipped
    }

    /// Step to the next entry, wrapping around. Returns whether the
    /// current entry changed.
    pub fn advance(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.current = (self.current + 1) % self.entries.len();
            true
        } else {
            false
        }
    }

    /// The ammo that should be equipped but is not yet.
    pub fn pending(&self) -> Option<FormId> {
        let current = self.current()?.form.id();
        (self.equipped != Some(current)).then_some(current)
    }

    pub fn mark_equipped(&mut self, id: FormId) {
        self.equipped = Some(id);
    }

    /// Apply an inventory delta to every entry holding `id`. Counts stop at zero.
    pub fn apply_count_change(&mut self, id: FormId, delta: i32) -> bool {
        let mut changed = false;
        for entry in self.entries.iter_mut().filter(|a| a.form.id() == id) {
            entry.item_count = entry.item_count.saturating_add(delta).max(0);
            changed = true;
        }
        changed
    }

    pub fn set_current_opacity(&mut self, opacity: u8) {
        if let Some(entry) = self.current_mut() {
            entry.feedback.opacity = opacity;
        }
    }

    pub fn highlight_current(&mut self) {
        if let Some(entry) = self.current_mut() {
            entry.feedback.highlight = true;
        }
    }

    pub fn clear_highlights(&mut self) {
        for entry in &mut self.entries {
            entry.feedback.highlight = false;
            entry.feedback.opacity = FULL_OPACITY;
        }
    }
}
