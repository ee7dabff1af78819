//! Core types for the pointer-gesture state machine.

use tabdock_common::TabId;

use crate::element::ElementPath;
use crate::hover::Hover;

/// A gesture past its first motion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drag {
    /// A tab is being carried. Its folder is looked up by id when needed,
    /// since the tree may change under the drag.
    Tab { tab: TabId },
    /// The separator in front of child `index` of `group` is being moved.
    Separator { group: ElementPath, index: usize },
}

/// Where the pointer gesture stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// Button down on a tab or separator, no motion yet.
    Armed(Hover),
    Dragging(Drag),
}

/// Outcome of releasing the button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Release {
    Nothing,
    /// Down and up without motion on the given target.
    Click(Hover),
    /// A tab drag ended; the caller resolves the drop target.
    Drop(TabId),
}
