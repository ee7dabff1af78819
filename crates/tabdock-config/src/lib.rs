//! Tabdock configuration.
//!
//! TOML-based configuration for the dock engine's pixel metrics and the
//! app's logging. Every section uses serde defaults so a partial file, or
//! no file at all, yields a working config.
//!
//! ```rust,no_run
//! use tabdock_config::{config_to_json, load_config};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{DockConfig, LayoutConfig, LogLevel, LoggingConfig, CONFIG_SCHEMA_VERSION};

use tabdock_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default file if none exists yet.
pub fn load_config() -> Result<DockConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &DockConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
