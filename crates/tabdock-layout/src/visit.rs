//! Pre-order traversal of the layout tree.

use tabdock_common::Orientation;

use crate::element::Element;
use crate::folder::Folder;
use crate::group::Group;
use crate::tab::TabInfo;

/// Receives the tree in pre-order. Every `enter_*` is matched by a `leave_*`
/// after the node's children or tabs.
pub trait Visitor {
    fn enter_group(&mut self, _orientation: Orientation, _weight: i32) {}

    fn leave_group(&mut self) {}

    fn enter_folder(&mut self, _weight: i32) {}

    fn tab(&mut self, _info: &TabInfo) {}

    fn leave_folder(&mut self) {}
}

impl<C> Group<C> {
    pub fn visit<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.enter_group(self.orientation, self.weight);
        for child in &self.children {
            match child {
                Element::Group(g) => g.visit(visitor),
                Element::Folder(f) => f.visit(visitor),
            }
        }
        visitor.leave_group();
    }
}

impl<C> Folder<C> {
    pub fn visit<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.enter_folder(self.weight);
        for tab in &self.tabs {
            visitor.tab(tab.info());
        }
        visitor.leave_folder();
    }
}
