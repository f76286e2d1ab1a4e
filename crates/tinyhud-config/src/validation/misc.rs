//! Validation for smaller config sections: hud and misc.

use crate::schema::TinyHudConfig;

use super::helpers::validate_range;

/// Largest supported page count per position.
pub const MAX_PAGE_COUNT: u32 = 25;

/// Validate overlay feedback constraints.
pub(crate) fn validate_hud(errors: &mut Vec<String>, config: &TinyHudConfig) {
    validate_range(
        errors,
        "hud.slot_button_feedback",
        config.hud.slot_button_feedback,
        0,
        255,
    );
}

/// Validate misc constraints.
pub(crate) fn validate_misc(errors: &mut Vec<String>, config: &TinyHudConfig) {
    validate_range(
        errors,
        "misc.max_page_count",
        config.misc.max_page_count,
        1,
        MAX_PAGE_COUNT,
    );
}
