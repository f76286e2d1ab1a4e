//! The slot table: every (page, position) cell, per-position cycling
//! state, and the ammo ring paired with ranged weapons.

pub mod ammo;
pub mod form;
pub mod slot;
pub mod table;

pub use ammo::{AmmoRing, AmmoSlot};
pub use form::{Form, SpellClass};
pub use slot::{Feedback, SlotAssignment, FULL_OPACITY};
pub use table::{PositionState, SlotTable};
