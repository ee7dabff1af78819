//! Dock metric validation.

use crate::schema::DockConfig;

use super::helpers::{validate_odd, validate_range};

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &DockConfig) {
    let layout = &config.layout;
    validate_range(errors, "layout.sep_height", layout.sep_height, 0, 8);
    validate_range(errors, "layout.bar_margin", layout.bar_margin, 0, 20);
    validate_range(errors, "layout.tab_margin", layout.tab_margin, 0, 40);
    validate_range(errors, "layout.folder_margin", layout.folder_margin, 1, 21);
    validate_odd(errors, "layout.folder_margin", layout.folder_margin);
    validate_range(errors, "layout.icon_size", layout.icon_size, 8, 64);
    validate_range(errors, "layout.min_width", layout.min_width, 1, 500);
    validate_range(errors, "layout.min_height", layout.min_height, 1, 500);
    validate_range(errors, "layout.min_tab_width", layout.min_tab_width, 1, 500);
}
