//! Layout and hit testing for the dock.

use tabdock_common::{Point, Rect, TabId};
use tracing::warn;

use crate::element::ElementPath;
use crate::hit_test::HitContext;
use crate::hover::Hover;
use crate::tab::TabHost;

use super::TabDock;

impl<H: TabHost> TabDock<H> {
    /// Lay the tree out inside `rect`. Negative sizes are clamped to zero.
    pub fn set_bounds(&mut self, rect: Rect) {
        let mut rect = rect;
        if rect.width < 0 || rect.height < 0 {
            warn!(?rect, "negative dock bounds clamped to zero");
            rect.width = rect.width.max(0);
            rect.height = rect.height.max(0);
        }
        self.bounds = Some(rect);
        self.relayout();
    }

    /// Re-run layout in the current bounds. A maximized folder takes the
    /// whole area and every other folder's content is hidden.
    pub(crate) fn relayout(&mut self) {
        let Some(bounds) = self.bounds else {
            return;
        };
        match self.maximized_folder() {
            Some(path) => {
                self.root.hide_contents();
                if let Some(folder) = self.root.folder_at_mut(path.indices()) {
                    folder.set_bounds(bounds, &self.metrics);
                }
            }
            None => self.root.set_bounds(bounds, &self.metrics),
        }
    }

    /// What lies under `p`. A tab being dragged is not hit.
    pub fn hit_test(&self, p: Point) -> Hover {
        self.find(p, self.drag.dragged_tab())
    }

    pub(crate) fn find(&self, p: Point, skip: Option<&TabId>) -> Hover {
        let ctx = HitContext::new(&self.metrics).skipping(skip);
        let Some(path) = self.maximized_folder() else {
            return self.root.find(&ElementPath::root(), p, &ctx);
        };
        match (path.split_last(), self.root.folder_at(path.indices())) {
            (Some((parent, index)), Some(folder)) => folder.find(&parent, index, p, &ctx),
            _ => Hover::None,
        }
    }
}
