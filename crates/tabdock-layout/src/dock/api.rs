//! Host-facing operations on the dock.

use tabdock_common::{LayoutError, TabId};
use tracing::debug;

use crate::blueprint::LayoutBlueprint;
use crate::element::ElementPath;
use crate::snapshot::LayoutSnapshot;
use crate::tab::{Tab, TabHost, TabInfo};
use crate::visit::Visitor;

use super::TabDock;

impl<H: TabHost> TabDock<H> {
    /// Add a tab to the first folder of the root, creating one in front if
    /// the first child is a group.
    pub fn add_tab_to_first_folder(&mut self, info: TabInfo) -> Result<(), LayoutError> {
        let tab = self.create_tab(info)?;
        debug!(tab = %tab.id(), "adding tab to first folder");
        self.root.add_tab_to_first_folder(tab);
        self.tree_changed(None);
        Ok(())
    }

    /// Add a tab to the folder reached by always descending into the
    /// heaviest child.
    pub fn add_tab_to_largest_folder(&mut self, info: TabInfo) -> Result<(), LayoutError> {
        let tab = self.create_tab(info)?;
        debug!(tab = %tab.id(), "adding tab to largest folder");
        self.root.add_tab_to_largest_folder(tab);
        self.tree_changed(None);
        Ok(())
    }

    /// Remove a tab and dispose its content. Folders and groups left empty
    /// are merged away. Returns `false` if no tab has this id.
    pub fn dispose_tab(&mut self, id: &TabId) -> bool {
        let Some(tab) = self.root.take_tab(id) else {
            return false;
        };
        debug!(tab = %id, "disposing tab");
        tab.dispose();
        self.merge_tree();
        self.tree_changed(Some(id));
        true
    }

    /// Make a tab the visible one of its folder. Returns `false` if no tab
    /// has this id.
    pub fn show_tab(&mut self, id: &TabId) -> bool {
        if !self.root.show_tab(id) {
            return false;
        }
        self.relayout();
        true
    }

    /// Walk the tree in pre-order.
    pub fn visit<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        self.root.visit(visitor);
    }

    /// The current arrangement as a blueprint.
    pub fn snapshot(&self) -> Option<LayoutBlueprint> {
        let mut snapshot = LayoutSnapshot::new();
        self.visit(&mut snapshot);
        snapshot.into_blueprint()
    }

    /// Maximize the folder at `folder`, or restore the normal layout if any
    /// folder is maximized. Returns the new maximized state, or `None` if
    /// `folder` does not name a folder.
    pub fn toggle_maximize(&mut self, folder: &ElementPath) -> Option<bool> {
        let maximized = if let Some(current) = self.maximized_folder() {
            self.root.folder_at_mut(current.indices())?.maximized = false;
            false
        } else {
            self.root.folder_at_mut(folder.indices())?.maximized = true;
            true
        };
        debug!(?folder, maximized, "maximize toggled");
        self.relayout();
        Some(maximized)
    }

    fn create_tab(&mut self, info: TabInfo) -> Result<Tab<H::Content>, LayoutError> {
        if self.contains_tab(&info.id) {
            return Err(LayoutError::DuplicateTab(info.id));
        }
        Ok(Tab::create(info, &mut self.host))
    }

    /// Simplify the tree. The root stays even when empty or left with one
    /// child.
    pub(crate) fn merge_tree(&mut self) {
        let state = self.root.merge();
        debug!(?state, children = self.root.len(), "merged layout tree");
    }

    /// Bookkeeping after a structural change made outside a gesture: stale
    /// paths are dropped and the tree is laid out again.
    pub(crate) fn tree_changed(&mut self, disposed: Option<&TabId>) {
        self.drag.tree_changed(disposed);
        self.hovered = Default::default();
        self.drop_preview = None;
        self.relayout();
    }
}
