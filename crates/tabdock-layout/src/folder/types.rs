//! Core types for folders: a tabbed leaf of the layout tree.

use std::ops::Range;

use tabdock_common::{Rect, TabId};

use crate::metrics::DockMetrics;
use crate::tab::Tab;

/// A leaf holding an ordered list of tabs, at most one of which is shown.
/// Tabs that do not fit on one row wrap onto further rows of the bar; all
/// rows past the first live in a dropdown.
#[derive(Debug)]
pub struct Folder<C> {
    pub(crate) weight: i32,
    pub(crate) bounds: Rect,
    pub(crate) tabs: Vec<Tab<C>>,
    /// Selected tab. `None` only when the folder is empty.
    pub(crate) current: Option<TabId>,
    pub(crate) maximized: bool,
    pub(crate) dropdown_open: bool,
    /// Tallest title among the tabs, refreshed on every layout pass.
    pub(crate) title_height: i32,
    /// Past-the-end tab index of each bar row. Never empty.
    pub(crate) row_ends: Vec<usize>,
}

impl<C> Folder<C> {
    pub fn new(weight: i32) -> Self {
        Self {
            weight,
            bounds: Rect::default(),
            tabs: Vec::new(),
            current: None,
            maximized: false,
            dropdown_open: false,
            title_height: 0,
            row_ends: vec![0],
        }
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn tabs(&self) -> &[Tab<C>] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tab_ids(&self) -> Vec<TabId> {
        self.tabs.iter().map(|t| t.id().clone()).collect()
    }

    pub fn contains(&self, id: &TabId) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id() == id)
    }

    pub fn tab(&self, id: &TabId) -> Option<&Tab<C>> {
        self.tabs.iter().find(|t| t.id() == id)
    }

    pub fn current(&self) -> Option<&TabId> {
        self.current.as_ref()
    }

    pub fn is_current(&self, id: &TabId) -> bool {
        self.current.as_ref() == Some(id)
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn title_height(&self) -> i32 {
        self.title_height
    }

    pub fn row_ends(&self) -> &[usize] {
        &self.row_ends
    }

    pub fn row_count(&self) -> usize {
        self.row_ends.len()
    }

    /// More than one row: the first row shows a dropdown icon.
    pub fn has_dropdown(&self) -> bool {
        self.row_ends.len() > 1
    }

    /// Tab indices shown on `row`. Empty for rows out of range.
    pub fn row_range(&self, row: usize) -> Range<usize> {
        let Some(&end) = self.row_ends.get(row) else {
            return 0..0;
        };
        let end = end.min(self.tabs.len());
        let start = if row == 0 { 0 } else { self.row_ends[row - 1] };
        start.min(end)..end
    }

    /// Width of the tab at `index`, in its current selection state.
    pub fn tab_width(&self, index: usize, metrics: &DockMetrics) -> i32 {
        self.tabs
            .get(index)
            .map(|t| t.width(self.is_current(t.id()), metrics))
            .unwrap_or(0)
    }

    /// Height of the bar area that accepts pointer input: one row, or all
    /// rows while the dropdown is open.
    pub fn bar_extent(&self, metrics: &DockMetrics) -> i32 {
        let rows = if self.dropdown_open {
            self.row_ends.len() as i32
        } else {
            1
        };
        metrics.row_height(self.title_height) * rows
    }

    /// Rectangle the selected tab's content occupies.
    pub fn content_bounds(&self, metrics: &DockMetrics) -> Rect {
        let bar = metrics.bar_height(self.title_height);
        Rect::new(
            self.bounds.x,
            self.bounds.y + bar,
            self.bounds.width,
            (self.bounds.height - bar).max(0),
        )
    }
}
