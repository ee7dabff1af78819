//! Drop targets for a carried tab.

use tabdock_common::{Orientation, Point, Rect, TabId};

use crate::element::ElementPath;
use crate::group::Group;
use crate::hover::Hover;

/// Which side of a folder body a tab is dropped on. The center of the body
/// accepts no split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropLocation {
    Left,
    Right,
    Top,
    Bottom,
}

impl DropLocation {
    /// Classify `p` against `bounds`: the outer columns split sideways, the
    /// top and bottom of the middle column split vertically.
    pub fn classify(bounds: Rect, p: Point) -> Option<Self> {
        if bounds.width <= 0 || bounds.height <= 0 || !bounds.contains(p) {
            return None;
        }
        match 3 * (p.x - bounds.x) / bounds.width {
            0 => Some(DropLocation::Left),
            2 => Some(DropLocation::Right),
            _ => match 3 * (p.y - bounds.y) / bounds.height {
                0 => Some(DropLocation::Top),
                2 => Some(DropLocation::Bottom),
                _ => None,
            },
        }
    }

    /// The axis along which the new folder sits next to the target.
    pub fn axis(self) -> Orientation {
        match self {
            DropLocation::Left | DropLocation::Right => Orientation::Horizontal,
            DropLocation::Top | DropLocation::Bottom => Orientation::Vertical,
        }
    }

    /// Whether the new folder goes before the target.
    pub fn is_leading(self) -> bool {
        matches!(self, DropLocation::Left | DropLocation::Top)
    }

    /// The part of `bounds` to highlight while hovering this location.
    pub fn highlight(self, b: Rect) -> Rect {
        match self {
            DropLocation::Left => Rect::new(b.x, b.y, b.width / 3, b.height),
            DropLocation::Right => Rect::new(b.x + 2 * b.width / 3, b.y, b.width / 3, b.height),
            DropLocation::Top => Rect::new(b.x, b.y, b.width, b.height / 3),
            DropLocation::Bottom => Rect::new(b.x, b.y + 2 * b.height / 3, b.width, b.height / 3),
        }
    }
}

/// What releasing a carried tab over a hover would do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Onto empty bar space: the tab joins the start of the next row.
    Row { folder: ElementPath, row: usize },
    /// Onto another tab: the tab is placed in front of it.
    Before { folder: ElementPath, tab: TabId },
    /// Onto a folder body: a new folder is split off the target.
    Split {
        parent: ElementPath,
        index: usize,
        location: DropLocation,
    },
}

impl DropTarget {
    /// Resolve the target under `p`. `None` when the release does nothing.
    pub fn from_hover<C>(hover: &Hover, p: Point, root: &Group<C>) -> Option<Self> {
        match hover {
            Hover::Bar { folder, row } => Some(DropTarget::Row {
                folder: folder.clone(),
                row: *row,
            }),
            Hover::Tab { folder, tab } => Some(DropTarget::Before {
                folder: folder.clone(),
                tab: tab.clone(),
            }),
            Hover::Folder { parent, index } => {
                let folder = root.folder_at(parent.child(*index).indices())?;
                let location = DropLocation::classify(folder.bounds(), p)?;
                Some(DropTarget::Split {
                    parent: parent.clone(),
                    index: *index,
                    location,
                })
            }
            _ => None,
        }
    }
}
