//! Shared range-validation helpers used by all domain validators.

/// One past the highest canonical key id (gamepad offset 266 + 16 buttons).
pub const MAX_KEY_ID: u32 = 282;

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float).
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `key` is not a canonical key id.
pub(crate) fn validate_key(errors: &mut Vec<String>, name: &str, key: u32) {
    if key >= MAX_KEY_ID {
        errors.push(format!("{name} = {key} is not a valid key id (must be < {MAX_KEY_ID})"));
    }
}
