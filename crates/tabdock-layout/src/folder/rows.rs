//! Multi-row packing of the tab bar.

use crate::metrics::DockMetrics;
use crate::tab::TabContent;

use super::Folder;

/// Pack tab widths into rows of at most `row_width` pixels, returning the
/// past-the-end index of each row.
///
/// The first row gives up one icon slot for the maximize button, and a
/// second one for the dropdown button unless the tab being placed is the
/// last. A row always takes at least one tab. An empty list yields `[0]`.
pub fn pack_rows(widths: &[i32], row_width: i32, icon_size: i32) -> Vec<usize> {
    let mut ends = Vec::new();
    let mut used = 0;
    for (index, &width) in widths.iter().enumerate() {
        let mut max_width = row_width;
        if ends.is_empty() {
            max_width -= icon_size;
            if index + 1 < widths.len() {
                max_width -= icon_size;
            }
        }
        if index > 0 && used + width > max_width {
            ends.push(index);
            used = 0;
        }
        used += width;
    }
    ends.push(widths.len());
    ends
}

impl<C: TabContent> Folder<C> {
    /// Recompute row ends for the current bounds and selection. Closes the
    /// dropdown once everything fits on one row.
    pub fn repack(&mut self, metrics: &DockMetrics) {
        let widths: Vec<i32> = (0..self.tabs.len())
            .map(|i| self.tab_width(i, metrics))
            .collect();
        self.row_ends = pack_rows(&widths, self.bounds.width, metrics.icon_size);
        if self.row_ends.len() < 2 {
            self.dropdown_open = false;
        }
    }
}
