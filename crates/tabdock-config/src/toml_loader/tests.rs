//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{DockConfig, LogLevel};
use std::path::Path;
use tabdock_common::ConfigError;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_tabdock_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[layout]
folder_margin = 3
min_width = 80
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.layout.folder_margin, 3);
    assert_eq!(config.layout.min_width, 80);
    // Defaults preserved
    assert_eq!(config.layout.icon_size, 24);
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_out_of_range_values_still_returns_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[layout]\nfolder_margin = 4\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.layout.folder_margin, 4);
}

#[test]
fn create_default_config_writes_parseable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config, DockConfig::default());
}

#[test]
fn default_template_mentions_every_layout_field() {
    let content = super::template::default_config_toml();
    for field in [
        "sep_height",
        "bar_margin",
        "tab_margin",
        "folder_margin",
        "icon_size",
        "min_width",
        "min_height",
        "min_tab_width",
    ] {
        assert!(content.contains(field), "template is missing {field}");
    }
}

#[test]
fn default_config_path_ends_with_tabdock() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("tabdock/config.toml"));
    }
}
