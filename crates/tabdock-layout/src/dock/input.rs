//! Pointer input: hover tracking, clicks, tab drops, separator drags.

use tabdock_common::{Point, TabId};
use tracing::{debug, trace};

use crate::drag::{Drag, DropLocation, DropTarget, Release};
use crate::element::ElementPath;
use crate::folder::Folder;
use crate::hover::Hover;
use crate::tab::{Tab, TabHost};

use super::{DockEvent, TabDock};

impl<H: TabHost> TabDock<H> {
    /// Primary button down at `p`. Ignored while a gesture is in progress.
    pub fn on_mouse_down(&mut self, p: Point) -> Option<DockEvent> {
        if !self.drag.is_idle() {
            return None;
        }
        let hover = self.hit_test(p);
        self.update_hover(hover.clone());
        match hover {
            Hover::Close { tab, .. } => Some(DockEvent::CloseRequested(tab)),
            Hover::Maximize { folder } => self
                .toggle_maximize(&folder)
                .map(|maximized| DockEvent::MaximizeToggled { maximized }),
            other => {
                self.drag.press(&other);
                None
            }
        }
    }

    /// Pointer motion to `p`, with or without the button held.
    pub fn on_mouse_move(&mut self, p: Point) {
        match self.drag.motion().cloned() {
            Some(Drag::Tab { .. }) => {
                let hover = self.hit_test(p);
                self.update_bar_dropdown(&hover);
                self.drop_preview = match &hover {
                    Hover::Folder { parent, index } => self
                        .root
                        .folder_at(parent.child(*index).indices())
                        .and_then(|f| {
                            DropLocation::classify(f.bounds(), p).map(|l| l.highlight(f.bounds()))
                        }),
                    _ => None,
                };
            }
            Some(Drag::Separator { group, index }) => {
                let metrics = self.metrics;
                let moved = self
                    .root
                    .group_at_mut(group.indices())
                    .is_some_and(|g| g.move_separator(index, p, &metrics));
                if moved {
                    trace!(?group, index, x = p.x, y = p.y, "separator moved");
                    self.relayout();
                }
            }
            None => {
                let hover = self.hit_test(p);
                self.update_hover(hover);
            }
        }
    }

    /// Primary button up at `p`.
    pub fn on_mouse_up(&mut self, p: Point) -> Option<DockEvent> {
        let event = match self.drag.release() {
            Release::Click(Hover::Tab { folder, tab }) => {
                let shown = self
                    .root
                    .folder_at_mut(folder.indices())
                    .is_some_and(|f| f.update_current(&tab));
                if shown {
                    self.relayout();
                    Some(DockEvent::TabShown(tab))
                } else {
                    None
                }
            }
            Release::Drop(tab) => {
                self.drop_preview = None;
                let hover = self.find(p, Some(&tab));
                self.drop_tab(&tab, &hover, p)
                    .then_some(DockEvent::TabMoved(tab))
            }
            _ => None,
        };
        let hover = self.hit_test(p);
        self.update_hover(hover);
        event
    }

    /// Apply a tab drop onto `hover`. Returns whether the tree changed.
    fn drop_tab(&mut self, id: &TabId, hover: &Hover, p: Point) -> bool {
        let Some(target) = DropTarget::from_hover(hover, p, &self.root) else {
            return false;
        };
        let Some(src) = self.root.find_tab(id) else {
            return false;
        };

        let dropped = match &target {
            DropTarget::Row { folder, row } if *folder == src => self
                .root
                .folder_at_mut(folder.indices())
                .is_some_and(|f| {
                    let moved = f.move_tab_to_row(id, *row);
                    f.update_current(id);
                    moved
                }),
            DropTarget::Row { folder, row } => {
                let row = *row;
                self.transfer(id, &src, folder, |f, tab| f.add_tab_at_row(tab, row))
            }
            DropTarget::Before { folder, tab: before } if *folder == src => self
                .root
                .folder_at_mut(folder.indices())
                .is_some_and(|f| {
                    let moved = f.move_tab_before(id, before);
                    f.update_current(id);
                    moved
                }),
            DropTarget::Before { folder, tab: before } => {
                self.transfer(id, &src, folder, |f, tab| f.add_tab_before(tab, before))
            }
            DropTarget::Split {
                parent,
                index,
                location,
            } => self.split_off(id, &src, parent, *index, *location),
        };
        if !dropped {
            return false;
        }

        debug!(tab = %id, ?target, "tab dropped");
        self.merge_tree();
        self.relayout();
        true
    }

    /// Move tab `id` from folder `src` into folder `dst`, placing it with
    /// `place`, and make it the visible tab there.
    fn transfer<F>(&mut self, id: &TabId, src: &ElementPath, dst: &ElementPath, place: F) -> bool
    where
        F: FnOnce(&mut Folder<H::Content>, Tab<H::Content>),
    {
        if self.root.folder_at(dst.indices()).is_none() {
            return false;
        }
        let Some(tab) = self
            .root
            .folder_at_mut(src.indices())
            .and_then(|f| f.remove_tab(id))
        else {
            return false;
        };
        match self.root.folder_at_mut(dst.indices()) {
            Some(folder) => {
                place(&mut *folder, tab);
                folder.update_current(id);
                true
            }
            None => {
                // Removing a tab leaves paths intact, so this only guards
                // against losing the tab.
                if let Some(folder) = self.root.folder_at_mut(src.indices()) {
                    folder.add_tab(tab);
                }
                false
            }
        }
    }

    /// Split a new folder off child `index` of the group at `parent` and
    /// move tab `id` into it.
    fn split_off(
        &mut self,
        id: &TabId,
        src: &ElementPath,
        parent: &ElementPath,
        index: usize,
        location: DropLocation,
    ) -> bool {
        let valid = self
            .root
            .group_at(parent.indices())
            .is_some_and(|g| index < g.len());
        if !valid {
            return false;
        }
        // Detach first: the split below shifts paths.
        let Some(tab) = self
            .root
            .folder_at_mut(src.indices())
            .and_then(|f| f.remove_tab(id))
        else {
            return false;
        };
        let created = self
            .root
            .group_at_mut(parent.indices())
            .and_then(|g| g.new_sub_folder(location, index))
            .map(|relative| parent.join(&relative));
        match created.and_then(|path| self.root.folder_at_mut(path.indices())) {
            Some(folder) => {
                folder.add_tab(tab);
                true
            }
            None => {
                if let Some(folder) = self.root.folder_at_mut(src.indices()) {
                    folder.add_tab(tab);
                }
                false
            }
        }
    }

    fn update_hover(&mut self, hover: Hover) {
        self.update_bar_dropdown(&hover);
        self.hovered = hover;
    }

    /// Open a folder's row dropdown when its icon is hovered; close it once
    /// the pointer leaves that folder's bar.
    fn update_bar_dropdown(&mut self, hover: &Hover) {
        match self.root.find_folder(|f| f.dropdown_open) {
            None => {
                if let Hover::Dropdown { folder } = hover {
                    if let Some(f) = self.root.folder_at_mut(folder.indices()) {
                        if f.set_dropdown_open(true) {
                            debug!(?folder, "bar dropdown opened");
                        }
                    }
                }
            }
            Some(open) => {
                if !hover.is_bar() || hover.folder().as_ref() != Some(&open) {
                    let closed = self
                        .root
                        .folder_at_mut(open.indices())
                        .is_some_and(|f| f.set_dropdown_open(false));
                    if closed {
                        debug!(folder = ?open, "bar dropdown closed");
                    }
                }
            }
        }
    }
}
