//! Shared range-validation helpers.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: i32, min: i32, max: i32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is even.
pub(crate) fn validate_odd(errors: &mut Vec<String>, name: &str, value: i32) {
    if value % 2 == 0 {
        errors.push(format!("{name} = {value} must be odd"));
    }
}
