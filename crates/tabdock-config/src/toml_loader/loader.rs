//! Read a config from a path or from the platform default location.

use crate::schema::DockConfig;
use crate::validation;
use std::io::ErrorKind;
use std::path::Path;
use tabdock_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file.
///
/// Missing fields take their defaults. Validation problems are logged and
/// the parsed config is returned unchanged; callers that need a hard
/// failure run `validation::validate` themselves.
pub fn load_from_path(path: &Path) -> Result<DockConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config: DockConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform default path.
///
/// On Linux this is `~/.config/tabdock/config.toml`. A missing file is
/// created from the commented template and defaults are returned.
pub fn load_default() -> Result<DockConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(DockConfig::default())
        }
        Err(e) => Err(e),
    }
}
