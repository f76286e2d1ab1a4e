use serde::Serialize;
use tinyhud_common::{ActionKind, FormId, Hand, SlotKind};

use crate::form::Form;

/// Opacity of a slot that is not being pressed.
pub const FULL_OPACITY: u8 = 255;

/// Transient UI state the renderer reads back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub highlight: bool,
    pub opacity: u8,
}

impl Default for Feedback {
    fn default() -> Self {
        Self {
            highlight: false,
            opacity: FULL_OPACITY,
        }
    }
}

/// One bindable object in one hand of one (page, position) cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotAssignment {
    /// `None` means the slot is empty (or an un-equip slot).
    pub form: Option<Form>,
    pub kind: SlotKind,
    pub action: ActionKind,
    pub two_handed: bool,
    pub left: bool,
    /// Inventory count for consumables and scrolls.
    pub item_count: i32,
    pub feedback: Feedback,
}

impl SlotAssignment {
    /// The placeholder every cell starts with.
    pub fn empty() -> Self {
        Self {
            form: None,
            kind: SlotKind::Empty,
            action: ActionKind::Default,
            two_handed: false,
            left: false,
            item_count: 0,
            feedback: Feedback::default(),
        }
    }

    pub fn new(form: Form, kind: SlotKind, action: ActionKind, left: bool) -> Self {
        let two_handed = form.is_two_handed();
        Self {
            form: Some(form),
            kind,
            action,
            two_handed,
            left,
            item_count: 0,
            feedback: Feedback::default(),
        }
    }

    /// An empty slot that empties `hand` when executed.
    pub fn un_equip(left: bool) -> Self {
        Self {
            action: ActionKind::UnEquip,
            left,
            ..Self::empty()
        }
    }

    /// True for the empty placeholder. Un-equip slots are deliberate
    /// bindings and count as occupied.
    pub fn is_placeholder(&self) -> bool {
        self.form.is_none() && self.action != ActionKind::UnEquip
    }

    pub fn form_id(&self) -> Option<FormId> {
        self.form.as_ref().map(Form::id)
    }

    pub fn hand(&self) -> Hand {
        Hand::from_left_flag(self.left)
    }
}
