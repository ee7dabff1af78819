//! Full configuration validation.
//!
//! Each section has its own submodule; this collects every problem into a
//! single `ConfigError::ValidationError`.

mod helpers;
mod layout;


use crate::schema::DockConfig;
use tabdock_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &DockConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_layout(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
