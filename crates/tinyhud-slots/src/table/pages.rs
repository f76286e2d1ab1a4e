//! Page/position handle: lookups, active pages, cycling and locks.

use tinyhud_common::Position;
use tracing::{trace, warn};

use super::SlotTable;
use crate::slot::SlotAssignment;

impl SlotTable {
    /// The slots at `(page, position)`, or `None` for a page past the max.
    pub fn get_slot(&self, page: u32, position: Position) -> Option<&[SlotAssignment]> {
        let index = self.cell_index(page, position)?;
        self.cells.get(index).map(Vec::as_slice)
    }

    pub fn get_slot_mut(&mut self, page: u32, position: Position) -> Option<&mut [SlotAssignment]> {
        let index = self.cell_index(page, position)?;
        self.cells.get_mut(index).map(Vec::as_mut_slice)
    }

    pub fn active_page(&self, position: Position) -> u32 {
        self.positions[position.index()].active_page
    }

    pub fn active_slots(&self, position: Position) -> Option<&[SlotAssignment]> {
        self.get_slot(self.active_page(position), position)
    }

    pub fn active_slots_mut(&mut self, position: Position) -> Option<&mut [SlotAssignment]> {
        let page = self.active_page(position);
        self.get_slot_mut(page, position)
    }

    /// Set every unlocked position to `page`. Returns the page actually
    /// applied.
    pub fn set_active_page(&mut self, page: u32) -> u32 {
        let page = self.clamp_page(page);
        for state in self.positions.iter_mut().filter(|s| !s.locked) {
            state.active_page = page;
        }
        page
    }

    /// Set one position's active page. Returns the page actually applied.
    pub fn set_active_page_for(&mut self, page: u32, position: Position) -> u32 {
        let page = self.clamp_page(page);
        self.positions[position.index()].active_page = page;
        page
    }

    /// Pages outside `[0, max_page_count)` fall back to 0.
    fn clamp_page(&self, page: u32) -> u32 {
        if page < self.max_page_count {
            page
        } else {
            warn!(
                "page {page} is past max page count {}, using page 0",
                self.max_page_count
            );
            0
        }
    }

    /// True if the cell holds at least one real binding.
    pub fn is_occupied(&self, page: u32, position: Position) -> bool {
        self.get_slot(page, position)
            .map(|slots| slots.iter().any(|s| !s.is_placeholder()))
            .unwrap_or(false)
    }

    /// The first occupied page after the active one, scanning circularly
    /// through every page. Returns the active page if nothing else is
    /// occupied.
    pub fn next_non_empty_page(&self, position: Position) -> u32 {
        let current = self.active_page(position);
        let max = self.max_page_count;
        let next = (1..=max)
            .map(|step| (current + step) % max)
            .find(|&page| self.is_occupied(page, position))
            .unwrap_or(current);
        trace!("next page for {position}: {current} -> {next}");
        next
    }

    pub fn highest_used_page(&self, position: Position) -> Option<u32> {
        self.positions[position.index()].highest_page
    }

    /// Recompute every position's highest occupied page.
    pub fn recompute_highest_pages(&mut self) {
        for position in Position::ALL {
            let highest = (0..self.max_page_count)
                .rev()
                .find(|&page| self.is_occupied(page, position));
            self.positions[position.index()].highest_page = highest;
        }
    }

    /// Legacy page flip: the page after the shared active page, wrapping
    /// after the highest page any position uses.
    pub fn next_page_id(&self) -> u32 {
        let highest = Position::ALL
            .iter()
            .filter_map(|&pos| self.highest_used_page(pos))
            .max()
            .unwrap_or(0);
        let current = self.active_page(Position::Top);
        if current >= highest {
            0
        } else {
            current + 1
        }
    }

    pub fn is_locked(&self, position: Position) -> bool {
        self.positions[position.index()].locked
    }

    pub fn set_locked(&mut self, position: Position, locked: bool) {
        self.positions[position.index()].locked = locked;
    }
}
