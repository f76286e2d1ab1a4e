//! Validation for `[[slots]]` layout entries.

use std::collections::HashSet;

use crate::schema::{HandSetting, TinyHudConfig};
use tinyhud_common::{ActionKind, SlotKind};

pub(crate) fn validate_slots(errors: &mut Vec<String>, config: &TinyHudConfig) {
    let max = config.misc.max_page_count;
    let mut seen = HashSet::new();

    for (i, entry) in config.slots.iter().enumerate() {
        if entry.page >= max {
            errors.push(format!(
                "slots[{i}].page = {} is out of range (max_page_count = {max})",
                entry.page
            ));
        }

        if !seen.insert((entry.page, entry.position)) {
            errors.push(format!(
                "slots[{i}] duplicates page {} {}",
                entry.page, entry.position
            ));
        }

        if entry.is_formless() && entry.action != ActionKind::UnEquip {
            errors.push(format!("slots[{i}] has no form"));
        }

        if entry.form.is_some() && entry.kind == SlotKind::Empty {
            errors.push(format!("slots[{i}].kind is empty but a form is set"));
        }

        if entry.hand == HandSetting::Single && !entry.kind.is_handed() {
            errors.push(format!(
                "slots[{i}].hand = single is not allowed for kind {:?}",
                entry.kind
            ));
        }
    }
}
