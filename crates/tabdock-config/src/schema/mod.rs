//! Configuration schema.
//!
//! Top-level `DockConfig` and its sections. Missing fields fall back to
//! their defaults during deserialization.

mod layout;
mod logging;

pub use layout::LayoutConfig;
pub use logging::{LogLevel, LoggingConfig};

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockConfig {
    pub layout: LayoutConfig,
    pub logging: LoggingConfig,
}
