//! Dock metric configuration.

use serde::{Deserialize, Serialize};

/// Pixel metrics for folder chrome and separator drags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Underline height below a row of tabs (valid range: 0-8).
    pub sep_height: i32,
    /// Vertical padding around tab titles (valid range: 0-20).
    pub bar_margin: i32,
    /// Horizontal padding around tab titles (valid range: 0-40).
    pub tab_margin: i32,
    /// Gap between sibling elements; must be odd (valid range: 1-21).
    pub folder_margin: i32,
    /// Icon slot size (valid range: 8-64).
    pub icon_size: i32,
    /// Minimum width a separator drag leaves (valid range: 1-500).
    pub min_width: i32,
    /// Minimum height a separator drag leaves (valid range: 1-500).
    pub min_height: i32,
    /// Minimum measured tab width (valid range: 1-500).
    pub min_tab_width: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sep_height: 2,
            bar_margin: 6,
            tab_margin: 10,
            folder_margin: 5,
            icon_size: 24,
            min_width: 50,
            min_height: 75,
            min_tab_width: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_config_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.sep_height, 2);
        assert_eq!(config.bar_margin, 6);
        assert_eq!(config.tab_margin, 10);
        assert_eq!(config.folder_margin, 5);
        assert_eq!(config.icon_size, 24);
        assert_eq!(config.min_width, 50);
        assert_eq!(config.min_height, 75);
        assert_eq!(config.min_tab_width, 50);
    }

    #[test]
    fn layout_config_partial_toml() {
        let toml_str = r#"
folder_margin = 7
icon_size = 16
"#;
        let config: LayoutConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.folder_margin, 7);
        assert_eq!(config.icon_size, 16);
        assert_eq!(config.tab_margin, 10);
        assert_eq!(config.min_height, 75);
    }
}
