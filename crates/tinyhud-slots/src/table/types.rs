//! Core types and constructors for SlotTable.

use serde::Serialize;
use tinyhud_common::Position;
use tinyhud_config::validation::MAX_PAGE_COUNT;
use tracing::warn;

use crate::ammo::AmmoRing;
use crate::slot::SlotAssignment;

/// Cycling state one position owns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PositionState {
    pub(super) active_page: u32,
    /// Locked positions never change page through cycling.
    pub(super) locked: bool,
    /// Highest page holding a real binding; `None` if nothing is bound.
    pub(super) highest_page: Option<u32>,
}

impl PositionState {
    pub fn active_page(&self) -> u32 {
        self.active_page
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn highest_page(&self) -> Option<u32> {
        self.highest_page
    }
}

/// Every page × position cell plus per-position state.
///
/// Cells live in one arena indexed by `page * Position::COUNT + position`.
/// A configuration reload builds a whole new table rather than editing
/// this one, so the input path never sees a half-built layout.
#[derive(Debug, Clone, Serialize)]
pub struct SlotTable {
    pub(super) cells: Vec<Vec<SlotAssignment>>,
    pub(super) positions: [PositionState; Position::COUNT],
    pub(super) max_page_count: u32,
    pub(super) ammo: AmmoRing,
}

impl SlotTable {
    /// A table with every cell holding one empty placeholder.
    ///
    /// The page count is clamped to `[1, MAX_PAGE_COUNT]`.
    pub fn new(max_page_count: u32) -> Self {
        let clamped = max_page_count.clamp(1, MAX_PAGE_COUNT);
        if clamped != max_page_count {
            warn!("max page count {max_page_count} out of range, using {clamped}");
        }
        let max_page_count = clamped;
        let cells = (0..max_page_count as usize * Position::COUNT)
            .map(|_| vec![SlotAssignment::empty()])
            .collect();
        Self {
            cells,
            positions: [PositionState::default(); Position::COUNT],
            max_page_count,
            ammo: AmmoRing::default(),
        }
    }

    pub(super) fn cell_index(&self, page: u32, position: Position) -> Option<usize> {
        (page < self.max_page_count).then(|| page as usize * Position::COUNT + position.index())
    }

    // -- Accessors --

    pub fn max_page_count(&self) -> u32 {
        self.max_page_count
    }

    pub fn position_state(&self, position: Position) -> &PositionState {
        &self.positions[position.index()]
    }

    pub fn ammo(&self) -> &AmmoRing {
        &self.ammo
    }

    pub fn ammo_mut(&mut self) -> &mut AmmoRing {
        &mut self.ammo
    }

    /// Iterate `(page, position, slots)` for every cell.
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, Position, &[SlotAssignment])> {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            let page = (i / Position::COUNT) as u32;
            Position::from_index(i % Position::COUNT).map(|pos| (page, pos, cell.as_slice()))
        })
    }
}

impl Default for SlotTable {
    fn default() -> Self {
        Self::new(1)
    }
}
