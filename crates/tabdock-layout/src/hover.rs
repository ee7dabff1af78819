//! Hit-test results.

use tabdock_common::{Orientation, TabId};

use crate::element::ElementPath;

/// What lies under the pointer. Paths are valid until the tree changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Hover {
    #[default]
    None,
    /// The gap in front of child `index` of `group`.
    Separator {
        group: ElementPath,
        index: usize,
        axis: Orientation,
    },
    /// The content area of the folder at child `index` of `parent`.
    Folder { parent: ElementPath, index: usize },
    /// Empty bar space on `row`, past the last tab.
    Bar { folder: ElementPath, row: usize },
    Tab { folder: ElementPath, tab: TabId },
    /// The close box of the selected tab.
    Close { folder: ElementPath, tab: TabId },
    Dropdown { folder: ElementPath },
    Maximize { folder: ElementPath },
}

impl Hover {
    /// Path of the folder this hover belongs to, if any.
    pub fn folder(&self) -> Option<ElementPath> {
        match self {
            Hover::None | Hover::Separator { .. } => None,
            Hover::Folder { parent, index } => Some(parent.child(*index)),
            Hover::Bar { folder, .. }
            | Hover::Tab { folder, .. }
            | Hover::Close { folder, .. }
            | Hover::Dropdown { folder }
            | Hover::Maximize { folder } => Some(folder.clone()),
        }
    }

    /// Anywhere on a folder's tab bar.
    pub fn is_bar(&self) -> bool {
        matches!(
            self,
            Hover::Bar { .. }
                | Hover::Tab { .. }
                | Hover::Close { .. }
                | Hover::Dropdown { .. }
                | Hover::Maximize { .. }
        )
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Hover::None)
    }
}
