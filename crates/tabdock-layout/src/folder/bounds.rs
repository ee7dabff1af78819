//! Folder layout: title height, content placement, visibility.

use tabdock_common::Rect;

use crate::metrics::DockMetrics;
use crate::tab::{Tab, TabContent};

use super::Folder;

impl<C: TabContent> Folder<C> {
    /// Place the folder at `rect`. Every tab's content gets the area below
    /// the bar; only the selected one is made visible.
    pub fn set_bounds(&mut self, rect: Rect, metrics: &DockMetrics) {
        self.bounds = rect;
        self.title_height = self.tabs.iter().map(Tab::title_height).max().unwrap_or(0);
        let content = self.content_bounds(metrics);
        let current = self.current.clone();
        for tab in &mut self.tabs {
            let visible = current.as_ref() == Some(tab.id());
            tab.content.set_bounds(content);
            tab.content.set_visible(visible);
        }
        self.repack(metrics);
    }

    /// Hide every tab's content. Used for folders hidden by a maximized
    /// sibling.
    pub fn hide_contents(&mut self) {
        for tab in &mut self.tabs {
            tab.content.set_visible(false);
        }
    }
}
