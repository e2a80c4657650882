//! Configuration validation.
//!
//! Collects every problem into a single `ConfigError` so one pass reports
//! all of them.

mod helpers;
mod window;


use crate::schema::NebulabunConfig;
use nebulabun_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &NebulabunConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    window::validate_window(&mut errors, &config.window);
    window::validate_native(&mut errors, &config.native);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
