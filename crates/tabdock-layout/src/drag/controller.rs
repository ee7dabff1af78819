//! The pointer-gesture state machine: Idle, Armed, Dragging.

use tabdock_common::TabId;
use tracing::debug;

use crate::hover::Hover;

use super::{Drag, DragState, Release};

/// Tracks one button gesture from press to release. It only decides what
/// the gesture is; the dock applies its effects to the tree.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DragState::Idle)
    }

    /// Button down on `hover`. Only tabs and separators arm a gesture.
    pub fn press(&mut self, hover: &Hover) {
        if !self.is_idle() {
            return;
        }
        if matches!(hover, Hover::Tab { .. } | Hover::Separator { .. }) {
            self.state = DragState::Armed(hover.clone());
        }
    }

    /// Pointer motion. An armed gesture becomes a drag on its first move.
    /// Returns the active drag, if any.
    pub fn motion(&mut self) -> Option<&Drag> {
        if let DragState::Armed(hover) = &self.state {
            let drag = match hover {
                Hover::Tab { tab, .. } => Drag::Tab { tab: tab.clone() },
                Hover::Separator { group, index, .. } => Drag::Separator {
                    group: group.clone(),
                    index: *index,
                },
                _ => return None,
            };
            debug!(?drag, "drag started");
            self.state = DragState::Dragging(drag);
        }
        match &self.state {
            DragState::Dragging(drag) => Some(drag),
            _ => None,
        }
    }

    /// Button up. Always returns to idle.
    pub fn release(&mut self) -> Release {
        match std::mem::take(&mut self.state) {
            DragState::Idle => Release::Nothing,
            DragState::Armed(hover) => Release::Click(hover),
            DragState::Dragging(Drag::Tab { tab }) => Release::Drop(tab),
            DragState::Dragging(Drag::Separator { .. }) => Release::Nothing,
        }
    }

    /// The tab being carried, if a tab drag is active.
    pub fn dragged_tab(&self) -> Option<&TabId> {
        match &self.state {
            DragState::Dragging(Drag::Tab { tab }) => Some(tab),
            _ => None,
        }
    }

    /// The tree changed outside the gesture. Gestures holding paths are
    /// dropped, as is a tab drag whose tab was `disposed`.
    pub fn tree_changed(&mut self, disposed: Option<&TabId>) {
        let cancel = match &self.state {
            DragState::Idle => false,
            DragState::Armed(_) | DragState::Dragging(Drag::Separator { .. }) => true,
            DragState::Dragging(Drag::Tab { tab }) => Some(tab) == disposed,
        };
        if cancel {
            debug!(state = ?self.state, "gesture cancelled by tree change");
            self.state = DragState::Idle;
        }
    }
}
