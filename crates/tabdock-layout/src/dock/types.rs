//! Core types for the dock: the tree plus its host and gesture state.

use tabdock_common::{LayoutError, Orientation, Rect, TabId};

use crate::blueprint::LayoutBlueprint;
use crate::drag::{DragController, DragState};
use crate::element::ElementPath;
use crate::group::Group;
use crate::hover::Hover;
use crate::metrics::DockMetrics;
use crate::tab::{Tab, TabHost};

/// Notifications for the host, returned from input handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DockEvent {
    /// A click made this tab the visible one of its folder.
    TabShown(TabId),
    /// A dragged tab was dropped somewhere new.
    TabMoved(TabId),
    /// The close box of this tab was pressed. The host decides whether to
    /// call [`TabDock::dispose_tab`].
    CloseRequested(TabId),
    MaximizeToggled { maximized: bool },
}

/// A dockable tab layout: a tree of groups and folders, the host that owns
/// the tab contents, and the pointer gesture in progress.
pub struct TabDock<H: TabHost> {
    pub(crate) root: Group<H::Content>,
    pub(crate) host: H,
    pub(crate) metrics: DockMetrics,
    pub(crate) drag: DragController,
    pub(crate) hovered: Hover,
    pub(crate) drop_preview: Option<Rect>,
    /// Container rectangle. Nothing is laid out until the host sets it.
    pub(crate) bounds: Option<Rect>,
}

impl<H: TabHost> TabDock<H> {
    /// An empty dock whose root runs along `orientation`.
    pub fn new(host: H, metrics: DockMetrics, orientation: Orientation) -> Self {
        Self::with_root(host, metrics, Group::new(orientation, 1))
    }

    /// A dock laid out as `blueprint` describes. Tab contents are created
    /// through `host`, and empty folders and groups are merged away.
    pub fn from_blueprint(
        mut host: H,
        metrics: DockMetrics,
        blueprint: &LayoutBlueprint,
    ) -> Result<Self, LayoutError> {
        blueprint.validate()?;
        let root = blueprint.build(&mut host);
        let mut dock = Self::with_root(host, metrics, root);
        dock.merge_tree();
        Ok(dock)
    }

    fn with_root(host: H, metrics: DockMetrics, root: Group<H::Content>) -> Self {
        Self {
            root,
            host,
            metrics,
            drag: DragController::new(),
            hovered: Hover::None,
            drop_preview: None,
            bounds: None,
        }
    }

    pub fn root(&self) -> &Group<H::Content> {
        &self.root
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn metrics(&self) -> &DockMetrics {
        &self.metrics
    }

    /// The container rectangle from the last [`TabDock::set_bounds`].
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn hovered(&self) -> &Hover {
        &self.hovered
    }

    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    /// Area that would become the new folder if the dragged tab were
    /// released now.
    pub fn drop_preview(&self) -> Option<Rect> {
        self.drop_preview
    }

    pub fn tab(&self, id: &TabId) -> Option<&Tab<H::Content>> {
        let path = self.root.find_tab(id)?;
        self.root.folder_at(path.indices())?.tab(id)
    }

    pub fn contains_tab(&self, id: &TabId) -> bool {
        self.root.find_tab(id).is_some()
    }

    /// Path of the maximized folder, if one is.
    pub fn maximized_folder(&self) -> Option<ElementPath> {
        self.root.find_folder(|f| f.maximized)
    }
}
