//! Pixel metrics for folder chrome: tab bar rows, icon slots, separators.

use tabdock_common::Orientation;

/// Sizes used by layout, row packing, and hit testing. The host usually
/// builds this from its configuration; `Default` matches the stock look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DockMetrics {
    /// Height of the underline below a row of tab titles.
    pub sep_height: i32,
    /// Vertical padding above and below a tab title.
    pub bar_margin: i32,
    /// Horizontal padding on each side of a tab title.
    pub tab_margin: i32,
    /// Gap between sibling elements of a group. Odd, so separators center.
    pub folder_margin: i32,
    /// Side of the square icon slots (close, dropdown, maximize).
    pub icon_size: i32,
    /// Smallest width a separator drag may leave on either side.
    pub min_width: i32,
    /// Smallest height a separator drag may leave on either side.
    pub min_height: i32,
    /// Lower bound for the measured width of a tab.
    pub min_tab_width: i32,
}

impl Default for DockMetrics {
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

impl DockMetrics {
    /// Height of the clickable part of a tab row.
    pub fn tab_height(&self, title_height: i32) -> i32 {
        self.bar_margin + title_height + self.bar_margin
    }

    /// Height of one tab row including its underline.
    pub fn row_height(&self, title_height: i32) -> i32 {
        self.tab_height(title_height) + self.sep_height
    }

    /// Height reserved above the tab contents.
    pub fn bar_height(&self, title_height: i32) -> i32 {
        self.row_height(title_height) + self.bar_margin
    }

    /// Smallest main-axis size a separator drag may leave on either side.
    pub fn min_extent(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.min_width,
            Orientation::Vertical => self.min_height,
        }
    }
}
