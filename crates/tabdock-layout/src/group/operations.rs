//! Mutating operations on Group: tab placement, splits, separator moves.

use tabdock_common::{Point, TabId};

use crate::drag::DropLocation;
use crate::element::{Element, UNSIZED};
use crate::folder::Folder;
use crate::metrics::DockMetrics;
use crate::tab::Tab;

use super::Group;

impl<C> Group<C> {
    /// Add `tab` to the first child if it is a folder. Otherwise a new folder
    /// is put in front, taking half of the first child's weight.
    pub fn add_tab_to_first_folder(&mut self, tab: Tab<C>) {
        match self.children.first_mut() {
            Some(Element::Folder(folder)) => folder.add_tab(tab),
            Some(first) => {
                let weight = first.weight() / 2;
                first.set_weight(weight);
                let mut folder = Folder::new(weight);
                folder.add_tab(tab);
                self.children.insert(0, Element::Folder(folder));
            }
            None => {
                let mut folder = Folder::new(UNSIZED);
                folder.add_tab(tab);
                self.children.push(Element::Folder(folder));
            }
        }
    }

    /// Add `tab` by descending into the heaviest child at every level. Ties
    /// go to the earliest child.
    pub fn add_tab_to_largest_folder(&mut self, tab: Tab<C>) {
        let mut largest = 0;
        for (i, child) in self.children.iter().enumerate().skip(1) {
            if child.weight() > self.children[largest].weight() {
                largest = i;
            }
        }
        match self.children.get_mut(largest) {
            Some(Element::Folder(folder)) => folder.add_tab(tab),
            Some(Element::Group(group)) => group.add_tab_to_largest_folder(tab),
            None => {
                let mut folder = Folder::new(UNSIZED);
                folder.add_tab(tab);
                self.children.push(Element::Folder(folder));
            }
        }
    }

    /// Select `id` in whichever folder holds it.
    pub fn show_tab(&mut self, id: &TabId) -> bool {
        self.children.iter_mut().any(|child| match child {
            Element::Folder(f) => f.show_tab(id),
            Element::Group(g) => g.show_tab(id),
        })
    }

    /// Detach `id` from whichever folder holds it. Empty folders are left
    /// for the merge pass.
    pub fn take_tab(&mut self, id: &TabId) -> Option<Tab<C>> {
        self.children.iter_mut().find_map(|child| match child {
            Element::Folder(f) => f.remove_tab(id),
            Element::Group(g) => g.take_tab(id),
        })
    }

    /// Create an empty folder next to the child at `index`, on the side
    /// given by `location`. Along this group's axis the child gives up half
    /// its weight to the new folder; across it, the child is wrapped in a
    /// new cross group together with the folder. Returns the new folder's
    /// path relative to this group.
    pub fn new_sub_folder(&mut self, location: DropLocation, index: usize) -> Option<Vec<usize>> {
        if index >= self.children.len() {
            return None;
        }
        if location.axis() == self.orientation {
            let child = &mut self.children[index];
            let weight = child.weight() / 2;
            child.set_weight(weight);
            let at = if location.is_leading() { index } else { index + 1 };
            self.children.insert(at, Element::Folder(Folder::new(weight)));
            Some(vec![at])
        } else {
            let old = self.children.remove(index);
            let weight = old.weight();
            let mut wrapper = Group::new(self.orientation.opposite(), weight);
            let folder = Element::Folder(Folder::new(weight));
            let at = if location.is_leading() {
                wrapper.children.push(folder);
                wrapper.children.push(old);
                0
            } else {
                wrapper.children.push(old);
                wrapper.children.push(folder);
                1
            };
            self.children.insert(index, Element::Group(wrapper));
            Some(vec![index, at])
        }
    }

    /// Drag the separator in front of child `index` to `p`. The neighbours
    /// take the sizes the pointer implies, unless either would drop below
    /// the minimum extent. Returns whether weights changed.
    pub fn move_separator(&mut self, index: usize, p: Point, metrics: &DockMetrics) -> bool {
        if index == 0 || index >= self.children.len() {
            return false;
        }
        let orientation = self.orientation;
        let half_margin = metrics.folder_margin / 2;
        let min = metrics.min_extent(orientation);
        let s = orientation.coord(p);

        let before = self.children[index - 1].bounds();
        let after = self.children[index].bounds();
        let new_before = s - half_margin - orientation.start(before);
        let new_after =
            orientation.start(after) + orientation.extent(after) - s - half_margin - 1;
        if new_before < min || new_after < min {
            return false;
        }
        self.children[index - 1].set_weight(new_before);
        self.children[index].set_weight(new_after);
        true
    }
}
