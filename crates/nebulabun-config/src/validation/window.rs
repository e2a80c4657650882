//! Window and native section validation.

use crate::schema::{NativeConfig, WindowConfig, OPAQUE};

use super::helpers::{validate_range, validate_range_i32};

/// Largest window dimension accepted from a config file.
const MAX_DIMENSION: u32 = 16_384;

pub(crate) fn validate_window(errors: &mut Vec<String>, window: &WindowConfig) {
    validate_range(errors, "window.width", window.width, 1, MAX_DIMENSION);
    validate_range(errors, "window.height", window.height, 1, MAX_DIMENSION);
    validate_range_i32(errors, "window.transparency", window.transparency, 0, OPAQUE);
}

pub(crate) fn validate_native(errors: &mut Vec<String>, native: &NativeConfig) {
    if let Some(path) = &native.library {
        if path.as_os_str().is_empty() {
            errors.push("native.library must not be empty".to_string());
        }
    }
}
