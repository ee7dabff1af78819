use std::path::PathBuf;

use crate::id::TabId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("duplicate tab id: {0}")]
    DuplicateTab(TabId),

    #[error("invalid layout blueprint: {0}")]
    InvalidBlueprint(String),
}

#[derive(Debug, thiserror::Error)]
pub enum DockError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("script error: {0}")]
    Script(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("layout.icon_size = 2".into());
        assert_eq!(
            err.to_string(),
            "config validation error: layout.icon_size = 2"
        );
    }

    #[test]
    fn layout_error_display() {
        let err = LayoutError::DuplicateTab(TabId::from("profiler"));
        assert_eq!(err.to_string(), "duplicate tab id: profiler");

        let err = LayoutError::InvalidBlueprint("folder without tabs".into());
        assert_eq!(err.to_string(), "invalid layout blueprint: folder without tabs");
    }

    #[test]
    fn dock_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let dock_err: DockError = config_err.into();
        assert!(matches!(dock_err, DockError::Config(_)));
        assert!(dock_err.to_string().contains("bad toml"));
    }

    #[test]
    fn dock_error_from_layout() {
        let layout_err = LayoutError::DuplicateTab(TabId::from("a"));
        let dock_err: DockError = layout_err.into();
        assert!(matches!(dock_err, DockError::Layout(_)));
        assert!(dock_err.to_string().contains("duplicate tab id"));
    }

    #[test]
    fn dock_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let dock_err: DockError = io_err.into();
        assert!(matches!(dock_err, DockError::Io(_)));
        assert!(dock_err.to_string().contains("file missing"));
    }

    #[test]
    fn dock_error_other_variants() {
        let err = DockError::Script("unknown step".into());
        assert_eq!(err.to_string(), "script error: unknown step");

        let err = DockError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
