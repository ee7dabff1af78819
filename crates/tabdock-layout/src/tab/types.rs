//! Core types for tabs: the host-facing info, the content contract, and
//! the measured tab itself.

use serde::{Deserialize, Serialize};
use tabdock_common::{Rect, Size, TabId};

use crate::metrics::DockMetrics;

/// What the host knows about a tab before it exists: identity and label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabInfo {
    pub id: TabId,
    pub label: String,
}

impl TabInfo {
    pub fn new(id: impl Into<TabId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Opaque content shown by a tab. The engine only positions it, toggles its
/// visibility, and disposes it when the tab goes away.
pub trait TabContent {
    fn set_bounds(&mut self, bounds: Rect);

    fn set_visible(&mut self, visible: bool);

    fn dispose(self)
    where
        Self: Sized,
    {
    }
}

/// The host side of the engine: creates content and measures titles.
pub trait TabHost {
    type Content: TabContent;

    /// Called exactly once per tab, when the tab is created.
    fn create_content(&mut self, info: &TabInfo) -> Self::Content;

    /// Size of `label` rendered in the normal or the selected title font.
    fn measure_title(&self, label: &str, selected: bool) -> Size;
}

/// A tab owned by a folder.
#[derive(Debug)]
pub struct Tab<C> {
    pub(crate) info: TabInfo,
    pub(crate) content: C,
    pub(crate) title_size: Size,
    pub(crate) selected_title_size: Size,
}

impl<C> Tab<C> {
    pub fn new(info: TabInfo, content: C, title_size: Size, selected_title_size: Size) -> Self {
        Self {
            info,
            content,
            title_size,
            selected_title_size,
        }
    }

    /// Measure the title and instantiate the content through `host`.
    pub fn create<H>(info: TabInfo, host: &mut H) -> Self
    where
        H: TabHost<Content = C>,
    {
        let title_size = host.measure_title(&info.label, false);
        let selected_title_size = host.measure_title(&info.label, true);
        let content = host.create_content(&info);
        Self::new(info, content, title_size, selected_title_size)
    }

    pub fn info(&self) -> &TabInfo {
        &self.info
    }

    pub fn id(&self) -> &TabId {
        &self.info.id
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// Tallest of the two measured titles.
    pub fn title_height(&self) -> i32 {
        self.title_size.height.max(self.selected_title_size.height)
    }

    /// Width of this tab in the bar. The selected state reserves an icon
    /// slot for the close box.
    pub fn width(&self, selected: bool, metrics: &DockMetrics) -> i32 {
        let width = if selected {
            metrics.tab_margin + self.selected_title_size.width + metrics.tab_margin + metrics.icon_size
        } else {
            metrics.tab_margin + self.title_size.width + metrics.tab_margin
        };
        width.max(metrics.min_tab_width)
    }
}

impl<C: TabContent> Tab<C> {
    pub fn dispose(self) {
        self.content.dispose();
    }
}
