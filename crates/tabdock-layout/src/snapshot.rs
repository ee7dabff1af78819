//! Rebuilding a blueprint from a live tree through the visitor.

use tabdock_common::Orientation;

use crate::blueprint::{BlueprintNode, LayoutBlueprint};
use crate::tab::TabInfo;
use crate::visit::Visitor;

/// Visitor that records the tree it walks as a [`LayoutBlueprint`].
#[derive(Debug, Default)]
pub struct LayoutSnapshot {
    groups: Vec<(Orientation, i32, Vec<BlueprintNode>)>,
    folder: Option<(i32, Vec<TabInfo>)>,
    root: Option<LayoutBlueprint>,
}

impl LayoutSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded layout, once a whole tree has been visited.
    pub fn into_blueprint(self) -> Option<LayoutBlueprint> {
        self.root
    }
}

impl Visitor for LayoutSnapshot {
    fn enter_group(&mut self, orientation: Orientation, weight: i32) {
        self.groups.push((orientation, weight, Vec::new()));
    }

    fn leave_group(&mut self) {
        let Some((orientation, weight, children)) = self.groups.pop() else {
            return;
        };
        match self.groups.last_mut() {
            Some((_, _, siblings)) => siblings.push(BlueprintNode::Group { weight, children }),
            None => self.root = Some(LayoutBlueprint { orientation, children }),
        }
    }

    fn enter_folder(&mut self, weight: i32) {
        self.folder = Some((weight, Vec::new()));
    }

    fn tab(&mut self, info: &TabInfo) {
        if let Some((_, tabs)) = &mut self.folder {
            tabs.push(info.clone());
        }
    }

    fn leave_folder(&mut self) {
        if let (Some((weight, tabs)), Some((_, _, siblings))) =
            (self.folder.take(), self.groups.last_mut())
        {
            siblings.push(BlueprintNode::Folder { weight, tabs });
        }
    }
}
